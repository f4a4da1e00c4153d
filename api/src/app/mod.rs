//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services map form-equivalent input onto ledger rows and confirmations.

pub mod booking_service;
pub mod order_service;

pub use booking_service::{BookingConfirmation, BookingKind, BookingRequest, BookingService};
pub use order_service::{MerchandiseOrder, MotorcycleOrder, OrderReceipt, OrderService};
