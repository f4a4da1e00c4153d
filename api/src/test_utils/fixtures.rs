//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, NaiveTime};

use crate::app::{BookingRequest, MerchandiseOrder, MotorcycleOrder};
use crate::domain::entities::Submission;

/// A complete motorcycle order
pub fn test_motorcycle_order() -> MotorcycleOrder {
    MotorcycleOrder {
        name: "Ana".to_string(),
        address: "Main St 1".to_string(),
        delivery_location: "Main St 1".to_string(),
        category: "Sports".to_string(),
    }
}

/// A complete merchandise order
pub fn test_merchandise_order() -> MerchandiseOrder {
    MerchandiseOrder {
        name: "Bo".to_string(),
        address: "Elm Rd 5".to_string(),
        item: "Helmet".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
    }
}

/// A complete booking request
pub fn test_booking_request() -> BookingRequest {
    BookingRequest {
        name: "Cy".to_string(),
        email: "cy@example.com".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
        time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
    }
}

/// A ledger row as produced by the motorcycle purchase flow
pub fn test_submission() -> Submission {
    Submission::motorcycle_purchase("Ana", "Main St 1", "Main St 1", "Sports", "2024-05-01")
}
