pub mod in_memory_food_repository;
pub mod postgres_food_repository;

pub use in_memory_food_repository::InMemoryFoodRepository;
pub use postgres_food_repository::PostgresFoodRepository;
