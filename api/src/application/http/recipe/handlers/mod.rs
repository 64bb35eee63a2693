pub mod enrich_ingredients;
pub mod generate_recipes;
pub mod update_favorite;
pub mod update_like;
