//! Domain entities
//!
//! Pure domain models: the ledger row shape and the static reference
//! tables the UI layer reads.

pub mod catalog;
pub mod dealer;
pub mod submission;

pub use catalog::{
    merchandise_price, motorcycle_price, CatalogEntry, MERCHANDISE_ITEMS, MOTORCYCLE_CATEGORIES,
};
pub use dealer::{Dealer, DEALERS, MAP_CENTER, MAP_ZOOM};
pub use submission::Submission;
