use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition::standards::{NutritionStandard, Sex},
    },
    entity::nutrition_standards::Model as NutritionStandardModel,
};

impl TryFrom<NutritionStandardModel> for NutritionStandard {
    type Error = CoreError;

    fn try_from(model: NutritionStandardModel) -> Result<Self, Self::Error> {
        let sex = Sex::parse(&model.sex).ok_or_else(|| {
            tracing::error!("Unknown sex '{}' in nutrition standard {}", model.sex, model.id);
            CoreError::InternalServerError
        })?;

        Ok(NutritionStandard {
            sex,
            age_range: model.age_range,
            age_min: model.age_min,
            age_max: model.age_max,
            energy_moderate: model.energy_moderate,
            protein_recommended: model.protein_recommended,
            protein_target_min: model.protein_target_min,
            protein_target_max: model.protein_target_max,
            fat_target_min: model.fat_target_min,
            fat_target_max: model.fat_target_max,
            carbohydrate_min: model.carbohydrate_min,
            carbohydrate_max: model.carbohydrate_max,
            fiber_target: model.fiber_target,
            sodium_target: model.sodium_target,
        })
    }
}
