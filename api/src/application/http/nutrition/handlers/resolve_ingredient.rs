use axum::extract::{Query, State};
use kojilab_core::domain::{
    food::entities::{FoodRecord, MatchStage, Resolution},
    nutrition::ports::NutritionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    nutrition::validators::ResolveIngredientParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveIngredientResponse {
    pub query: String,
    /// `exact`, `keyword` or `prefix`.
    pub stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub low_confidence: bool,
    pub food: FoodRecord,
}

impl ResolveIngredientResponse {
    pub fn new(query: String, resolution: Resolution) -> Self {
        let low_confidence = resolution.is_low_confidence();
        let keyword = match &resolution.stage {
            MatchStage::Keyword { keyword } => Some(keyword.clone()),
            _ => None,
        };

        Self {
            query,
            stage: resolution.stage.as_str().to_string(),
            keyword,
            low_confidence,
            food: resolution.record,
        }
    }
}

#[utoipa::path(
    get,
    path = "/foods/resolve",
    tag = "nutrition",
    summary = "Resolve an ingredient name",
    description = "Runs the alias and search cascade for one ingredient name and returns the matching food record",
    params(ResolveIngredientParams),
    responses(
        (status = 200, body = ResolveIngredientResponse),
        (status = 404, description = "No food record matched")
    )
)]
pub async fn resolve_ingredient(
    State(state): State<AppState>,
    Query(params): Query<ResolveIngredientParams>,
) -> Result<Response<ResolveIngredientResponse>, ApiError> {
    params
        .validate()
        .map_err(|e| ApiError::UnProcessableEntity(e.to_string()))?;

    let resolution = state
        .service
        .resolve_ingredient(params.name.clone())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("No food matched {}", params.name)))?;

    Ok(Response::OK(ResolveIngredientResponse::new(
        params.name,
        resolution,
    )))
}
