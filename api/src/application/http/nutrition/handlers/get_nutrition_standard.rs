use axum::extract::{Query, State};
use kojilab_core::domain::nutrition::{
    ports::NutritionService,
    value_objects::{GetNutritionStandardInput, NutritionStandardReport},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::GetNutritionStandardParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionStandardResponse {
    pub data: NutritionStandardReport,
}

#[utoipa::path(
    get,
    path = "/standards",
    tag = "nutrition",
    summary = "Get the dietary reference intake for a profile",
    description = "Looks up the reference band for sex and age, falling back to the adult default, and derives PFC gram targets when a calorie total is given",
    params(GetNutritionStandardParams),
    responses(
        (status = 200, body = GetNutritionStandardResponse)
    )
)]
pub async fn get_nutrition_standard(
    State(state): State<AppState>,
    Query(params): Query<GetNutritionStandardParams>,
) -> Result<Response<GetNutritionStandardResponse>, ApiError> {
    let report = state
        .service
        .get_nutrition_standard(GetNutritionStandardInput {
            age: params.age(),
            total_calories: params.total_calories(),
            sex: params.sex,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNutritionStandardResponse { data: report }))
}
