use crate::{domain::food::entities::FoodRecord, entity::japanese_foods::Model as FoodModel};

impl From<&FoodModel> for FoodRecord {
    fn from(model: &FoodModel) -> Self {
        FoodRecord {
            id: model.id,
            food_code: model.food_code.clone(),
            name: model.name.clone(),
            name_kana: model.name_kana.clone(),
            category: model.category.clone(),
            search_text: model.search_text.clone(),
            energy_kcal: model.energy_kcal,
            protein: model.protein,
            fat: model.fat,
            carbs: model.carbs,
            sodium: model.sodium,
            is_proprietary: model.is_proprietary,
        }
    }
}

impl From<FoodModel> for FoodRecord {
    fn from(model: FoodModel) -> Self {
        FoodRecord::from(&model)
    }
}
