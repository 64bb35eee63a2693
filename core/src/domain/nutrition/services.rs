use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::{entities::Resolution, ports::FoodRepository, services::FoodResolver},
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::{Ingredient, NutrientTotals, NutritionSummary},
        ports::{NutritionService, NutritionStandardRepository},
        standards::{
            DEFAULT_STANDARD_AGE, DEFAULT_STANDARD_SEX, NOTE_MATCHED, NOTE_OUT_OF_RANGE,
            NOTE_UNSET, NutritionStandardResult, PfcRecommendations, SUPPORTED_AGES, Sex,
        },
        value_objects::{
            CalculateNutritionInput, GetNutritionStandardInput, NutritionReport,
            NutritionStandardReport,
        },
    },
    recipe::ports::{LLMClient, RecipeRepository},
};

/// Sums per-ingredient contributions into a recipe-level summary.
pub struct NutritionAggregator<'a, F> {
    resolver: FoodResolver<'a, F>,
}

impl<'a, F> NutritionAggregator<'a, F>
where
    F: FoodRepository,
{
    pub fn new(resolver: FoodResolver<'a, F>) -> Self {
        Self { resolver }
    }

    /// Each distinct name is resolved once, concurrently; the reduction runs
    /// in input order so identical inputs give bit-identical sums. Any
    /// repository failure fails the whole call.
    pub async fn aggregate(&self, ingredients: &[Ingredient]) -> Result<NutritionSummary, CoreError> {
        let mut seen = HashSet::new();
        let names: Vec<&str> = ingredients
            .iter()
            .map(|ingredient| ingredient.item.as_str())
            .filter(|name| seen.insert(*name))
            .collect();

        let resolver = self.resolver;
        let resolved = try_join_all(names.into_iter().map(|name| async move {
            resolver
                .resolve(name)
                .await
                .map(|resolution| (name, resolution))
        }))
        .await?;

        let cache: HashMap<&str, Option<Resolution>> = resolved.into_iter().collect();

        let mut totals = NutrientTotals::default();
        for ingredient in ingredients {
            let grams = ingredient.grams();
            match cache.get(ingredient.item.as_str()) {
                Some(Some(resolution)) => {
                    debug!(
                        ingredient = %ingredient.item,
                        record = %resolution.record.name,
                        grams,
                        "adding contribution"
                    );
                    totals += NutrientTotals::contribution(&resolution.record, grams);
                }
                _ => {
                    warn!(ingredient = %ingredient.item, grams, "unresolved ingredient counted as zero");
                }
            }
        }

        Ok(totals.round())
    }
}

/// Reference intake for a shopper profile. Anything outside the supported
/// ages, or a missing sex or age, yields the adult male default.
pub async fn lookup_nutrition_standard<NS>(
    repository: &NS,
    sex: Option<Sex>,
    age: Option<i32>,
) -> Result<NutritionStandardResult, CoreError>
where
    NS: NutritionStandardRepository,
{
    let note = match (sex, age) {
        (Some(sex), Some(age)) if SUPPORTED_AGES.contains(&age) => {
            if let Some(standard) = repository.find_by_sex_and_age(sex, age).await? {
                return Ok(NutritionStandardResult {
                    standard,
                    is_default: false,
                    note: NOTE_MATCHED.to_string(),
                });
            }
            NOTE_OUT_OF_RANGE
        }
        (Some(_), Some(_)) => NOTE_OUT_OF_RANGE,
        _ => NOTE_UNSET,
    };

    let standard = repository
        .find_by_sex_and_age(DEFAULT_STANDARD_SEX, DEFAULT_STANDARD_AGE)
        .await?
        .ok_or_else(|| {
            tracing::error!("default nutrition standard (male, 30) is missing");
            CoreError::NotFound
        })?;

    Ok(NutritionStandardResult {
        standard,
        is_default: true,
        note: note.to_string(),
    })
}

impl<F, NS, RR, LLM, HC> Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    /// Nutrition summary and salt comparison for one ingredient list.
    pub(crate) async fn enrich(&self, ingredients: &[Ingredient]) -> Result<NutritionReport, CoreError> {
        let nutrition = self.aggregator().aggregate(ingredients).await?;
        let comparison = self.seasoning_estimator.estimate_reduction(ingredients);

        Ok(NutritionReport {
            nutrition,
            comparison,
        })
    }
}

impl<F, NS, RR, LLM, HC> NutritionService for Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn calculate_nutrition(
        &self,
        input: CalculateNutritionInput,
    ) -> Result<NutritionReport, CoreError> {
        let report = self.enrich(&input.ingredients).await?;

        info!(
            ingredients = input.ingredients.len(),
            sodium = report.nutrition.sodium,
            calories = report.nutrition.calories,
            "nutrition calculated"
        );

        Ok(report)
    }

    async fn resolve_ingredient(&self, name: String) -> Result<Option<Resolution>, CoreError> {
        self.resolver().resolve(&name).await
    }

    async fn get_nutrition_standard(
        &self,
        input: GetNutritionStandardInput,
    ) -> Result<NutritionStandardReport, CoreError> {
        let sex = input.sex.as_deref().and_then(Sex::parse);
        let result =
            lookup_nutrition_standard(&self.nutrition_standard_repository, sex, input.age).await?;

        let pfc = input
            .total_calories
            .filter(|kcal| kcal.is_finite() && *kcal > 0.0)
            .map(|kcal| PfcRecommendations::from_standard(&result.standard, kcal));

        Ok(NutritionStandardReport { result, pfc })
    }
}
