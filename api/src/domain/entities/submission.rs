//! Submission domain entity
//!
//! One row of the append-only submission ledger. Every flow that persists
//! anything writes exactly this shape, in this column order.

use serde::{Deserialize, Serialize};

/// A single ledger row: six string fields in fixed column order.
///
/// The serde renames match the header row of the backing store. Every field
/// defaults to the empty string, so a partially filled form still produces
/// a complete row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Purchase", default)]
    pub purchase: String,
    #[serde(rename = "Delivery Location", default)]
    pub delivery_location: String,
    #[serde(rename = "Delivery Date", default)]
    pub delivery_date: String,
}

impl Submission {
    /// Column names of the backing store, in the fixed order.
    pub const COLUMNS: [&'static str; 6] = [
        "Name",
        "Email",
        "Address",
        "Purchase",
        "Delivery Location",
        "Delivery Date",
    ];

    /// Row for a motorcycle purchase. Email is not collected by this flow.
    pub fn motorcycle_purchase(
        name: &str,
        address: &str,
        delivery_location: &str,
        category: &str,
        delivery_date: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: String::new(),
            address: address.to_string(),
            purchase: format!("{} Motorcycle", category),
            delivery_location: delivery_location.to_string(),
            delivery_date: delivery_date.to_string(),
        }
    }

    /// Row for a merchandise purchase. Merchandise ships to the billing
    /// address, so Delivery Location repeats Address.
    pub fn merchandise_purchase(
        name: &str,
        address: &str,
        item: &str,
        delivery_date: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: String::new(),
            address: address.to_string(),
            purchase: format!("{} Merchandise", item),
            delivery_location: address.to_string(),
            delivery_date: delivery_date.to_string(),
        }
    }

    /// Row for a booking (test drive or service appointment). Bookings
    /// collect an email instead of an address; nothing is delivered.
    pub fn booking(label: &str, name: &str, email: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            address: String::new(),
            purchase: label.to_string(),
            delivery_location: String::new(),
            delivery_date: date.to_string(),
        }
    }
}
