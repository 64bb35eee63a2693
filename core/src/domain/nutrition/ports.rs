use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::Resolution,
    nutrition::{
        standards::{NutritionStandard, Sex},
        value_objects::{
            CalculateNutritionInput, GetNutritionStandardInput, NutritionReport,
            NutritionStandardReport,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait NutritionStandardRepository: Send + Sync {
    /// Band for `sex` whose age range contains `age`.
    fn find_by_sex_and_age(
        &self,
        sex: Sex,
        age: i32,
    ) -> impl Future<Output = Result<Option<NutritionStandard>, CoreError>> + Send;
}

pub trait NutritionService: Send + Sync {
    fn calculate_nutrition(
        &self,
        input: CalculateNutritionInput,
    ) -> impl Future<Output = Result<NutritionReport, CoreError>> + Send;

    fn resolve_ingredient(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Resolution>, CoreError>> + Send;

    fn get_nutrition_standard(
        &self,
        input: GetNutritionStandardInput,
    ) -> impl Future<Output = Result<NutritionStandardReport, CoreError>> + Send;
}
