pub mod common;
pub mod food;
pub mod health;
pub mod ingredient_alias;
pub mod nutrition;
pub mod recipe;
pub mod seasoning;
