pub mod health;
pub mod nutrition;
pub mod proxy_context;
pub mod recipe;
pub mod server;
