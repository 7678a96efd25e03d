pub mod booking;
pub mod commands;
pub mod value_objects;

pub use booking::*;
pub use commands::*;
pub use value_objects::*;
