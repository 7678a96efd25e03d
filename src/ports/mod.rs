pub mod booking_store;
pub mod desk_availability;

pub use booking_store::*;
pub use desk_availability::*;
