use sea_orm::ActiveValue::Set;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::entities::{GeneratedRecipe, Recipe, RecipeRequest},
    },
    entity::{
        generated_recipes::{ActiveModel as RecipeActiveModel, Model as RecipeModel},
        recipe_requests::ActiveModel as RequestActiveModel,
    },
};

fn from_json<T: DeserializeOwned + Default>(value: serde_json::Value, field: &str, id: uuid::Uuid) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(recipe_id = %id, field, "stored recipe field is unreadable: {}", e);
        T::default()
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize recipe field: {}", e);
        CoreError::InternalServerError
    })
}

impl From<RecipeModel> for GeneratedRecipe {
    fn from(model: RecipeModel) -> Self {
        let id = model.id;

        GeneratedRecipe {
            id,
            request_id: model.request_id,
            recipe: Recipe {
                id: Some(id),
                name: model.name,
                ingredients: from_json(model.ingredients, "ingredients", id),
                steps: from_json(model.steps, "steps", id),
                benefit: model.benefit,
                nutrition: model.nutrition.and_then(|v| from_json(v, "nutrition", id)),
                comparison: model.comparison.and_then(|v| from_json(v, "comparison", id)),
            },
            like_count: model.like_count,
            favorite_count: model.favorite_count,
            created_at: model.created_at.to_utc(),
        }
    }
}

pub fn request_active_model(request: &RecipeRequest) -> RequestActiveModel {
    RequestActiveModel {
        id: Set(request.id),
        shop: Set(request.shop.clone()),
        customer_id: Set(request.customer_id.clone()),
        condition: Set(request.condition.clone()),
        needs: Set(request.needs.clone()),
        koji_type: Set(request.koji_type.clone()),
        other_ingredients: Set(request.other_ingredients.clone()),
        created_at: Set(request.created_at.fixed_offset()),
    }
}

pub fn recipe_active_model(generated: &GeneratedRecipe) -> Result<RecipeActiveModel, CoreError> {
    let recipe = &generated.recipe;

    Ok(RecipeActiveModel {
        id: Set(generated.id),
        request_id: Set(generated.request_id),
        name: Set(recipe.name.clone()),
        ingredients: Set(to_json(&recipe.ingredients)?),
        steps: Set(to_json(&recipe.steps)?),
        benefit: Set(recipe.benefit.clone()),
        nutrition: Set(recipe.nutrition.as_ref().map(to_json).transpose()?),
        comparison: Set(recipe.comparison.as_ref().map(to_json).transpose()?),
        like_count: Set(generated.like_count),
        favorite_count: Set(generated.favorite_count),
        created_at: Set(generated.created_at.fixed_offset()),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::nutrition::entities::NutritionSummary;

    #[test]
    fn test_model_with_unreadable_json_keeps_the_rest() {
        let model = RecipeModel {
            id: Uuid::nil(),
            request_id: Uuid::nil(),
            name: "鮭の塩麹焼き".to_string(),
            ingredients: serde_json::json!([{"item": "鮭", "amount": 100}]),
            steps: serde_json::json!(42),
            benefit: "減塩".to_string(),
            nutrition: Some(serde_json::json!({"protein": 22.3, "fat": 4.1, "carbs": 0.0, "sodium": 1806.0, "calories": 133.0})),
            comparison: None,
            like_count: 3,
            favorite_count: 1,
            created_at: Utc::now().fixed_offset(),
        };

        let generated = GeneratedRecipe::from(model);

        assert_eq!(generated.recipe.ingredients.len(), 1);
        assert_eq!(generated.recipe.ingredients[0].item, "鮭");
        assert_eq!(generated.recipe.ingredients[0].amount, Some(100.0));
        assert!(generated.recipe.steps.is_empty());
        assert_eq!(generated.recipe.nutrition.map(|n: NutritionSummary| n.sodium), Some(1806.0));
        assert_eq!(generated.like_count, 3);
    }
}
