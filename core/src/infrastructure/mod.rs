pub mod db;
pub mod food;
pub mod health;
pub mod llm;
pub mod nutrition;
pub mod recipe;
