use kojilab_core::domain::{nutrition::entities::Ingredient, recipe::entities::InteractionAction};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "condition must be between 1 and 1000 characters"
    ))]
    #[schema(example = "最近疲れやすい")]
    pub condition: String,
    #[validate(length(max = 1000))]
    pub needs: Option<String>,
    #[validate(length(max = 100))]
    #[schema(example = "塩麹")]
    pub koji_type: Option<String>,
    #[validate(length(max = 1000))]
    pub other_ingredients: Option<String>,
    /// Overrides the shop given by the app proxy.
    pub shop: Option<String>,
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteractionRequest {
    /// Falls back to the proxy's logged-in customer.
    #[validate(length(max = 64))]
    pub customer_id: Option<String>,
    pub action: InteractionAction,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct EnrichIngredientsRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "ingredients must contain between 1 and 100 items"
    ))]
    pub ingredients: Vec<Ingredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_uses_camel_case() {
        let request: GenerateRecipesRequest = serde_json::from_str(
            r#"{"condition": "冷え性", "kojiType": "塩麹", "otherIngredients": "鮭"}"#,
        )
        .expect("request parses");

        assert!(request.validate().is_ok());
        assert_eq!(request.koji_type.as_deref(), Some("塩麹"));
        assert_eq!(request.other_ingredients.as_deref(), Some("鮭"));
        assert!(request.shop.is_none());
    }

    #[test]
    fn test_empty_condition_is_rejected() {
        let request: GenerateRecipesRequest =
            serde_json::from_str(r#"{"condition": ""}"#).expect("request parses");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_interaction_action_is_lowercase() {
        let request: UpdateInteractionRequest =
            serde_json::from_str(r#"{"customerId": "7301", "action": "remove"}"#)
                .expect("request parses");

        assert_eq!(request.action, InteractionAction::Remove);
        assert!(serde_json::from_str::<UpdateInteractionRequest>(r#"{"action": "toggle"}"#).is_err());
    }
}
