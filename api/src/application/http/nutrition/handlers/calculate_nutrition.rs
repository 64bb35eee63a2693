use axum::extract::State;
use kojilab_core::domain::nutrition::{
    ports::NutritionService,
    value_objects::{CalculateNutritionInput, NutritionReport},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::CalculateNutritionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculateNutritionResponse {
    pub data: NutritionReport,
}

#[utoipa::path(
    post,
    path = "/calculate",
    tag = "nutrition",
    summary = "Calculate recipe nutrition",
    description = "Resolves every ingredient against the food database and returns the rounded totals with the koji salt-reduction estimate",
    responses(
        (status = 200, body = CalculateNutritionResponse)
    ),
    request_body = CalculateNutritionRequest
)]
pub async fn calculate_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalculateNutritionRequest>,
) -> Result<Response<CalculateNutritionResponse>, ApiError> {
    let report = state
        .service
        .calculate_nutrition(CalculateNutritionInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CalculateNutritionResponse { data: report }))
}
