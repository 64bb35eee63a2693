use axum::extract::State;
use kojilab_core::domain::{nutrition::value_objects::NutritionReport, recipe::ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::EnrichIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichIngredientsResponse {
    pub data: NutritionReport,
}

#[utoipa::path(
    post,
    path = "/nutrition",
    tag = "recipes",
    summary = "Recompute nutrition for an edited recipe",
    description = "Recalculates totals and the salt-reduction comparison after the shopper changes a generated recipe's ingredients",
    responses(
        (status = 200, body = EnrichIngredientsResponse)
    ),
    request_body = EnrichIngredientsRequest
)]
pub async fn enrich_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EnrichIngredientsRequest>,
) -> Result<Response<EnrichIngredientsResponse>, ApiError> {
    let report = state
        .service
        .enrich_ingredients(payload.ingredients)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EnrichIngredientsResponse { data: report }))
}
