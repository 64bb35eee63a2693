pub mod builtin;
pub mod entities;

pub use entities::*;
