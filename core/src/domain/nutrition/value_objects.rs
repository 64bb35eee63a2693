use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    nutrition::{
        entities::{Ingredient, NutritionSummary},
        standards::{NutritionStandardResult, PfcRecommendations},
    },
    seasoning::entities::Comparison,
};

pub struct CalculateNutritionInput {
    pub ingredients: Vec<Ingredient>,
}

/// Profile as entered by the shopper; anything unparsable falls back to the
/// default standard.
pub struct GetNutritionStandardInput {
    pub sex: Option<String>,
    pub age: Option<i32>,
    pub total_calories: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReport {
    pub nutrition: NutritionSummary,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionStandardReport {
    pub result: NutritionStandardResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfc: Option<PfcRecommendations>,
}
