use axum::extract::{Path, State};
use kojilab_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use super::update_like::{UpdateInteractionResponse, interaction_input};
use crate::application::http::{
    proxy_context::ProxyContext,
    recipe::validators::UpdateInteractionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{recipe_id}/favorite",
    tag = "recipes",
    summary = "Favorite or unfavorite a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Generated recipe id"),
    ),
    responses(
        (status = 200, body = UpdateInteractionResponse),
        (status = 400, description = "No customer id"),
        (status = 404, description = "Recipe not found")
    ),
    request_body = UpdateInteractionRequest
)]
pub async fn update_favorite(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    proxy: ProxyContext,
    ValidateJson(payload): ValidateJson<UpdateInteractionRequest>,
) -> Result<Response<UpdateInteractionResponse>, ApiError> {
    let result = state
        .service
        .update_favorite(interaction_input(recipe_id, proxy, payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result.into()))
}
