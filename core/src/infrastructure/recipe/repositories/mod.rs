pub mod recipe_repository;

pub use recipe_repository::PostgresRecipeRepository;
