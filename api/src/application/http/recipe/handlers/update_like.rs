use axum::extract::{Path, State};
use kojilab_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{InteractionResult, UpdateInteractionInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

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

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteractionResponse {
    pub success: bool,
    /// `added` or `removed`.
    pub action: String,
    pub like_count: i32,
    pub favorite_count: i32,
}

impl From<InteractionResult> for UpdateInteractionResponse {
    fn from(result: InteractionResult) -> Self {
        Self {
            success: true,
            action: result.action.as_past_tense().to_string(),
            like_count: result.like_count,
            favorite_count: result.favorite_count,
        }
    }
}

/// Body customer first, then the proxy's logged-in customer. An empty id is
/// rejected by the service.
pub fn interaction_input(
    recipe_id: Uuid,
    proxy: ProxyContext,
    payload: UpdateInteractionRequest,
) -> UpdateInteractionInput {
    UpdateInteractionInput {
        recipe_id,
        customer_id: payload
            .customer_id
            .filter(|id| !id.trim().is_empty())
            .or(proxy.logged_in_customer_id)
            .unwrap_or_default(),
        action: payload.action,
    }
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/like",
    tag = "recipes",
    summary = "Like or unlike a recipe",
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
pub async fn update_like(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    proxy: ProxyContext,
    ValidateJson(payload): ValidateJson<UpdateInteractionRequest>,
) -> Result<Response<UpdateInteractionResponse>, ApiError> {
    let result = state
        .service
        .update_like(interaction_input(recipe_id, proxy, payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kojilab_core::domain::recipe::entities::{InteractionAction, InteractionCounts};

    #[test]
    fn test_body_customer_wins_over_proxy() {
        let proxy = ProxyContext {
            shop: None,
            logged_in_customer_id: Some("proxy".into()),
        };
        let payload = UpdateInteractionRequest {
            customer_id: Some("body".into()),
            action: InteractionAction::Add,
        };

        let input = interaction_input(Uuid::nil(), proxy, payload);
        assert_eq!(input.customer_id, "body");
    }

    #[test]
    fn test_falls_back_to_proxy_customer() {
        let proxy = ProxyContext {
            shop: None,
            logged_in_customer_id: Some("7301".into()),
        };
        let payload = UpdateInteractionRequest {
            customer_id: Some("  ".into()),
            action: InteractionAction::Remove,
        };

        let input = interaction_input(Uuid::nil(), proxy, payload);
        assert_eq!(input.customer_id, "7301");
        assert_eq!(input.action, InteractionAction::Remove);
    }

    #[test]
    fn test_response_reports_past_tense() {
        let result = InteractionResult::new(
            InteractionAction::Remove,
            InteractionCounts {
                like_count: 0,
                favorite_count: 2,
            },
        );

        let response = UpdateInteractionResponse::from(result);
        assert!(response.success);
        assert_eq!(response.action, "removed");
        assert_eq!(response.favorite_count, 2);
    }
}
