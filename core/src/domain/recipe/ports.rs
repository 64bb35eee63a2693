use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::Ingredient, value_objects::NutritionReport},
    recipe::{
        entities::{
            GeneratedRecipe, InteractionAction, InteractionCounts, InteractionKind, RecipeRequest,
        },
        value_objects::{GenerateRecipesInput, GeneratedRecipes, InteractionResult, UpdateInteractionInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Stores the request and its recipes in one transaction.
    fn create_request(
        &self,
        request: RecipeRequest,
        recipes: Vec<GeneratedRecipe>,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<GeneratedRecipe>, CoreError>> + Send;

    /// Adds or removes one customer's like or favorite. Repeating an add is a
    /// no-op and counters never drop below zero.
    fn record_interaction(
        &self,
        recipe_id: Uuid,
        customer_id: &str,
        kind: InteractionKind,
        action: InteractionAction,
    ) -> impl Future<Output = Result<InteractionCounts, CoreError>> + Send;
}

/// Chat-completion backend returning the raw JSON content of the reply.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_recipes(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<GeneratedRecipes, CoreError>> + Send;

    fn enrich_ingredients(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<NutritionReport, CoreError>> + Send;

    fn update_like(
        &self,
        input: UpdateInteractionInput,
    ) -> impl Future<Output = Result<InteractionResult, CoreError>> + Send;

    fn update_favorite(
        &self,
        input: UpdateInteractionInput,
    ) -> impl Future<Output = Result<InteractionResult, CoreError>> + Send;
}
