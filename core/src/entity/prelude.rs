pub use super::generated_recipes::Entity as GeneratedRecipes;
pub use super::japanese_foods::Entity as JapaneseFoods;
pub use super::nutrition_standards::Entity as NutritionStandards;
pub use super::recipe_interactions::Entity as RecipeInteractions;
pub use super::recipe_requests::Entity as RecipeRequests;
