pub mod nutrition_standard_repository;

pub use nutrition_standard_repository::PostgresNutritionStandardRepository;
