mod booking_service;
mod errors;

pub use booking_service::{ServiceDependencies, book_desk};
pub use errors::{BookDeskError, Result};
