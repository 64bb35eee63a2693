use chrono::Utc;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::Ingredient, ports::NutritionStandardRepository, value_objects::NutritionReport,
    },
    recipe::{
        entities::{GeneratedRecipe, InteractionKind, Recipe, RecipeRequest},
        ports::{LLMClient, RecipeRepository, RecipeService},
        prompt::{system_prompt, user_message},
        value_objects::{
            GenerateRecipesInput, GeneratedRecipes, InteractionResult, RecipeEnvelope,
            UpdateInteractionInput,
        },
    },
};

fn parse_recipes(content: &str) -> Result<Vec<Recipe>, CoreError> {
    let envelope: RecipeEnvelope = serde_json::from_str(content).map_err(|e| {
        error!("Failed to parse recipes from LLM response: {}", e);
        CoreError::ExternalServiceError(format!("unparsable LLM response: {e}"))
    })?;

    if envelope.recipes.is_empty() {
        error!("LLM response contained no recipes");
        return Err(CoreError::ExternalServiceError(
            "LLM response contained no recipes".to_string(),
        ));
    }

    Ok(envelope.recipes)
}

impl<F, NS, RR, LLM, HC> Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    /// Attaches nutrition and comparison to every recipe. A recipe whose
    /// enrichment fails keeps both fields empty.
    async fn enrich_recipes(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let reports = join_all(recipes.iter().map(|recipe| self.enrich(&recipe.ingredients))).await;

        recipes
            .into_iter()
            .zip(reports)
            .map(|(recipe, report)| match report {
                Ok(NutritionReport {
                    nutrition,
                    comparison,
                }) => Recipe {
                    nutrition: Some(nutrition),
                    comparison: Some(comparison),
                    ..recipe
                },
                Err(e) => {
                    warn!(recipe = %recipe.name, error = %e, "recipe enrichment failed");
                    recipe
                }
            })
            .collect()
    }

    async fn update_interaction(
        &self,
        kind: InteractionKind,
        input: UpdateInteractionInput,
    ) -> Result<InteractionResult, CoreError> {
        let customer_id = input.customer_id.trim();
        if customer_id.is_empty() {
            return Err(CoreError::Invalid("customer_id is required".to_string()));
        }

        if self.recipe_repository.get_recipe(input.recipe_id).await?.is_none() {
            return Err(CoreError::NotFound);
        }

        let counts = self
            .recipe_repository
            .record_interaction(input.recipe_id, customer_id, kind, input.action)
            .await?;

        info!(
            recipe_id = %input.recipe_id,
            kind = kind.as_str(),
            action = input.action.as_past_tense(),
            like_count = counts.like_count,
            favorite_count = counts.favorite_count,
            "recipe interaction updated"
        );

        Ok(InteractionResult::new(input.action, counts))
    }
}

impl<F, NS, RR, LLM, HC> RecipeService for Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<GeneratedRecipes, CoreError> {
        if input.condition.trim().is_empty() {
            return Err(CoreError::Invalid("condition is required".to_string()));
        }

        let content = self
            .llm_client
            .generate_recipes(system_prompt(), user_message(&input))
            .await?;

        let recipes = parse_recipes(&content)?;
        info!(shop = %input.shop, count = recipes.len(), "recipes generated");

        let mut recipes = self.enrich_recipes(recipes).await;

        let request = RecipeRequest::new(&input);
        let request_id = request.id;
        let generated: Vec<GeneratedRecipe> = recipes
            .iter()
            .cloned()
            .map(|recipe| GeneratedRecipe::new(request_id, recipe))
            .collect();

        let request_id = match self.recipe_repository.create_request(request, generated).await {
            Ok(saved) => {
                for (recipe, stored) in recipes.iter_mut().zip(&saved) {
                    recipe.id = Some(stored.id);
                }
                info!(request_id = %request_id, customer_id = ?input.customer_id, "recipe request stored");
                Some(request_id)
            }
            Err(e) => {
                error!("Failed to store recipe request: {}", e);
                None
            }
        };

        Ok(GeneratedRecipes {
            request_id,
            shop: input.shop,
            recipes,
            timestamp: Utc::now(),
        })
    }

    async fn enrich_ingredients(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> Result<NutritionReport, CoreError> {
        self.enrich(&ingredients).await
    }

    async fn update_like(
        &self,
        input: UpdateInteractionInput,
    ) -> Result<InteractionResult, CoreError> {
        self.update_interaction(InteractionKind::Like, input).await
    }

    async fn update_favorite(
        &self,
        input: UpdateInteractionInput,
    ) -> Result<InteractionResult, CoreError> {
        self.update_interaction(InteractionKind::Favorite, input).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::fakes::{
            FailingRecipeRepository, InMemoryRecipeRepository, SAMPLE_LLM_RESPONSE,
            StaticLLMClient, UnavailableFoodRepository, service_with, service_with_food,
            test_service,
        },
        recipe::entities::InteractionAction,
    };

    fn input(condition: &str) -> GenerateRecipesInput {
        GenerateRecipesInput {
            shop: "kojilab-dev.myshopify.com".to_string(),
            customer_id: Some("42".to_string()),
            condition: condition.to_string(),
            koji_type: Some("塩麹".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_recipes_enriches_and_stores() {
        let service = test_service();

        let generated = service.generate_recipes(input("むくみが気になる")).await.unwrap();

        assert_eq!(generated.recipes.len(), 3);
        assert!(generated.request_id.is_some());

        let salmon = &generated.recipes[0];
        let nutrition = salmon.nutrition.unwrap();
        assert_eq!(nutrition.sodium, 1806.0);
        let comparison = salmon.comparison.as_ref().unwrap();
        assert!(comparison.sodium_reduction > 0.0);

        let stored_id = salmon.id.unwrap();
        assert!(service.recipe_repository.get_recipe(stored_id).await.unwrap().is_some());
        assert_eq!(service.recipe_repository.request_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_recipes_requires_condition() {
        let result = test_service().generate_recipes(input("  ")).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_unparsable_llm_output_is_an_error() {
        let service = service_with(
            InMemoryRecipeRepository::default(),
            StaticLLMClient::new("これはJSONではありません"),
        );

        let result = service.generate_recipes(input("疲れ")).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));

        let service = service_with(
            InMemoryRecipeRepository::default(),
            StaticLLMClient::new(r#"{"recipes": []}"#),
        );
        let result = service.generate_recipes(input("疲れ")).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let service = service_with(InMemoryRecipeRepository::default(), StaticLLMClient::failing());

        let result = service.generate_recipes(input("疲れ")).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_still_returns_recipes() {
        let service = service_with(FailingRecipeRepository, StaticLLMClient::new(SAMPLE_LLM_RESPONSE));

        let generated = service.generate_recipes(input("疲れ")).await.unwrap();

        assert_eq!(generated.request_id, None);
        assert_eq!(generated.recipes.len(), 3);
        assert!(generated.recipes.iter().all(|r| r.id.is_none()));
    }

    #[tokio::test]
    async fn test_enrichment_failure_leaves_fields_empty() {
        let service = service_with_food(UnavailableFoodRepository);

        let generated = service.generate_recipes(input("疲れ")).await.unwrap();

        assert!(generated.recipes.iter().all(|r| r.nutrition.is_none() && r.comparison.is_none()));
    }

    #[tokio::test]
    async fn test_like_is_idempotent_and_never_negative() {
        let service = test_service();
        let generated = service.generate_recipes(input("疲れ")).await.unwrap();
        let recipe_id = generated.recipes[0].id.unwrap();

        let like = |action| UpdateInteractionInput {
            recipe_id,
            customer_id: "42".to_string(),
            action,
        };

        let first = service.update_like(like(InteractionAction::Add)).await.unwrap();
        let second = service.update_like(like(InteractionAction::Add)).await.unwrap();
        assert_eq!(first.like_count, 1);
        assert_eq!(second.like_count, 1);

        let removed = service.update_like(like(InteractionAction::Remove)).await.unwrap();
        let removed_again = service.update_like(like(InteractionAction::Remove)).await.unwrap();
        assert_eq!(removed.like_count, 0);
        assert_eq!(removed_again.like_count, 0);
        assert_eq!(removed_again.action, InteractionAction::Remove);
    }

    #[tokio::test]
    async fn test_favorite_counts_separately_from_like() {
        let service = test_service();
        let generated = service.generate_recipes(input("疲れ")).await.unwrap();
        let recipe_id = generated.recipes[1].id.unwrap();

        for customer in ["1", "2"] {
            service
                .update_favorite(UpdateInteractionInput {
                    recipe_id,
                    customer_id: customer.to_string(),
                    action: InteractionAction::Add,
                })
                .await
                .unwrap();
        }

        let result = service
            .update_like(UpdateInteractionInput {
                recipe_id,
                customer_id: "1".to_string(),
                action: InteractionAction::Add,
            })
            .await
            .unwrap();

        assert_eq!(result.favorite_count, 2);
        assert_eq!(result.like_count, 1);
    }

    #[tokio::test]
    async fn test_interaction_on_unknown_recipe_is_not_found() {
        let result = test_service()
            .update_favorite(UpdateInteractionInput {
                recipe_id: Uuid::nil(),
                customer_id: "42".to_string(),
                action: InteractionAction::Add,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_interaction_requires_customer() {
        let result = test_service()
            .update_like(UpdateInteractionInput {
                recipe_id: Uuid::nil(),
                customer_id: " ".to_string(),
                action: InteractionAction::Add,
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_enrich_ingredients() {
        let report = test_service()
            .enrich_ingredients(vec![Ingredient::new("鮭", 100.0), Ingredient::new("MUROの塩麹", 15.0)])
            .await
            .unwrap();

        assert_eq!(report.nutrition.sodium, 1806.0);
        assert_eq!(report.comparison.traditional_sodium, 2362.0);
    }
}
