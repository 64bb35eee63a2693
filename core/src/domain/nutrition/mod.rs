pub mod entities;
pub mod ports;
pub mod services;
pub mod standards;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use standards::*;
pub use value_objects::*;
