use axum::extract::State;
use kojilab_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{GenerateRecipesInput, GeneratedRecipes},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    proxy_context::ProxyContext,
    recipe::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub success: bool,
    pub data: GeneratedRecipes,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate koji recipes",
    description = "Asks the language model for recipes matching the shopper's condition, enriches each with nutrition and salt-reduction figures, and stores them",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 502, description = "Recipe generation service failed")
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    proxy: ProxyContext,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let shop = payload
        .shop
        .filter(|shop| !shop.trim().is_empty())
        .or(proxy.shop)
        .unwrap_or_else(|| state.args.server.default_shop.clone());

    let result = state
        .service
        .generate_recipes(GenerateRecipesInput {
            shop,
            customer_id: payload.customer_id.or(proxy.logged_in_customer_id),
            condition: payload.condition,
            needs: payload.needs,
            koji_type: payload.koji_type,
            other_ingredients: payload.other_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse {
        success: true,
        data: result,
    }))
}
