use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::{InteractionAction, InteractionCounts, Recipe};

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipesInput {
    pub shop: String,
    pub customer_id: Option<String>,
    pub condition: String,
    pub needs: Option<String>,
    pub koji_type: Option<String>,
    pub other_ingredients: Option<String>,
}

pub struct UpdateInteractionInput {
    pub recipe_id: Uuid,
    pub customer_id: String,
    pub action: InteractionAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipes {
    /// Absent when the request could not be stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub shop: String,
    pub recipes: Vec<Recipe>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    pub action: InteractionAction,
    pub like_count: i32,
    pub favorite_count: i32,
}

impl InteractionResult {
    pub fn new(action: InteractionAction, counts: InteractionCounts) -> Self {
        Self {
            action,
            like_count: counts.like_count,
            favorite_count: counts.favorite_count,
        }
    }
}

/// Body the model is asked to produce.
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeEnvelope {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}
