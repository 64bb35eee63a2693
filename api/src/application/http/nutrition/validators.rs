use kojilab_core::domain::nutrition::entities::Ingredient;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalculateNutritionRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "ingredients must contain between 1 and 100 items"
    ))]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct ResolveIngredientParams {
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    #[schema(example = "しゃけ")]
    pub name: String,
}

/// Profile fields arrive as raw strings from the storefront form; anything
/// unparsable is passed on as absent.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct GetNutritionStandardParams {
    #[schema(example = "female")]
    pub sex: Option<String>,
    #[schema(example = "34")]
    pub age: Option<String>,
    #[schema(example = "2000")]
    pub total_calories: Option<String>,
}

impl GetNutritionStandardParams {
    pub fn age(&self) -> Option<i32> {
        self.age.as_deref().and_then(|age| age.trim().parse().ok())
    }

    pub fn total_calories(&self) -> Option<f64> {
        self.total_calories
            .as_deref()
            .and_then(|calories| calories.trim().parse::<f64>().ok())
            .filter(|calories| calories.is_finite() && *calories > 0.0)
    }
}
