use std::sync::Arc;

use crate::domain::{
    food::{ports::FoodRepository, services::FoodResolver},
    health::ports::HealthCheckRepository,
    ingredient_alias::entities::AliasTable,
    nutrition::{ports::NutritionStandardRepository, services::NutritionAggregator},
    recipe::ports::{LLMClient, RecipeRepository},
    seasoning::services::SeasoningEstimator,
};

/// Wires the repositories and engine settings together; every service trait is
/// implemented on this type.
#[derive(Clone)]
pub struct Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) food_repository: F,
    pub(crate) nutrition_standard_repository: NS,
    pub(crate) recipe_repository: RR,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
    pub(crate) alias_table: Arc<AliasTable>,
    pub(crate) search_limit: u64,
    pub(crate) seasoning_estimator: SeasoningEstimator,
}

impl<F, NS, RR, LLM, HC> Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        food_repository: F,
        nutrition_standard_repository: NS,
        recipe_repository: RR,
        llm_client: LLM,
        health_check_repository: HC,
        alias_table: Arc<AliasTable>,
        search_limit: u64,
        seasoning_estimator: SeasoningEstimator,
    ) -> Self {
        Self {
            food_repository,
            nutrition_standard_repository,
            recipe_repository,
            llm_client,
            health_check_repository,
            alias_table,
            search_limit,
            seasoning_estimator,
        }
    }

    pub(crate) fn resolver(&self) -> FoodResolver<'_, F> {
        FoodResolver::new(&self.food_repository, &self.alias_table)
            .with_search_limit(self.search_limit)
    }

    pub(crate) fn aggregator(&self) -> NutritionAggregator<'_, F> {
        NutritionAggregator::new(self.resolver())
    }
}
