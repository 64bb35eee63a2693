//! `SeaORM` entities for the kojilab schema.

pub mod prelude;

pub mod generated_recipes;
pub mod japanese_foods;
pub mod nutrition_standards;
pub mod recipe_interactions;
pub mod recipe_requests;
