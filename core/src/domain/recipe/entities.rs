use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    nutrition::entities::{Ingredient, NutritionSummary},
    recipe::value_objects::GenerateRecipesInput,
    seasoning::entities::Comparison,
};

/// A recipe as returned to the storefront. Parsed from the LLM output, so
/// every field tolerates being absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "list_or_lines")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "list_or_lines")]
    pub steps: Vec<RecipeStep>,
    #[serde(default)]
    pub benefit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecipeStep {
    Numbered { step_number: u32, description: String },
    Text(String),
}

impl RecipeStep {
    pub fn description(&self) -> &str {
        match self {
            RecipeStep::Numbered { description, .. } => description,
            RecipeStep::Text(text) => text,
        }
    }
}

impl From<String> for RecipeStep {
    fn from(text: String) -> Self {
        RecipeStep::Text(text)
    }
}

impl From<String> for Ingredient {
    fn from(item: String) -> Self {
        Ingredient {
            item,
            amount: None,
            unit: None,
        }
    }
}

/// Models sometimes return a newline-separated string where a list was asked
/// for.
fn list_or_lines<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + From<String>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrText<T> {
        List(Vec<T>),
        Text(String),
    }

    Ok(match ListOrText::<T>::deserialize(deserializer)? {
        ListOrText::List(items) => items,
        ListOrText::Text(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| T::from(line.to_string()))
            .collect(),
    })
}

/// The shopper's form submission, stored alongside the recipes it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub id: Uuid,
    pub shop: String,
    pub customer_id: Option<String>,
    pub condition: String,
    pub needs: Option<String>,
    pub koji_type: Option<String>,
    pub other_ingredients: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RecipeRequest {
    pub fn new(input: &GenerateRecipesInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            shop: input.shop.clone(),
            customer_id: input.customer_id.clone(),
            condition: input.condition.clone(),
            needs: input.needs.clone(),
            koji_type: input.koji_type.clone(),
            other_ingredients: input.other_ingredients.clone(),
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub id: Uuid,
    pub request_id: Uuid,
    pub recipe: Recipe,
    pub like_count: i32,
    pub favorite_count: i32,
    pub created_at: DateTime<Utc>,
}

impl GeneratedRecipe {
    pub fn new(request_id: Uuid, recipe: Recipe) -> Self {
        let (now, timestamp) = generate_timestamp();
        let id = Uuid::new_v7(timestamp);

        Self {
            id,
            request_id,
            recipe: Recipe {
                id: Some(id),
                ..recipe
            },
            like_count: 0,
            favorite_count: 0,
            created_at: now,
        }
    }

    pub fn counts(&self) -> InteractionCounts {
        InteractionCounts {
            like_count: self.like_count,
            favorite_count: self.favorite_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Favorite,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Favorite => "favorite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InteractionAction {
    Add,
    Remove,
}

impl InteractionAction {
    /// Past tense, as reported back to the storefront.
    pub fn as_past_tense(&self) -> &'static str {
        match self {
            InteractionAction::Add => "added",
            InteractionAction::Remove => "removed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InteractionCounts {
    pub like_count: i32,
    pub favorite_count: i32,
}
