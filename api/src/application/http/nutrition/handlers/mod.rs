pub mod calculate_nutrition;
pub mod get_nutrition_standard;
pub mod resolve_ingredient;
