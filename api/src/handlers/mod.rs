//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod bookings;
pub mod catalog;
pub mod dealers;
pub mod orders;
pub mod submissions;

pub use bookings::{book_service_appointment, book_test_drive};
pub use catalog::{list_merchandise_items, list_motorcycle_categories};
pub use dealers::list_dealers;
pub use orders::{order_merchandise, order_motorcycle};
pub use submissions::list_submissions;
