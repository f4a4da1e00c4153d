//! Catalog handlers
//!
//! Read-only endpoints exposing the static price tables.

use axum::Json;
use serde::Serialize;

use crate::domain::entities::{CatalogEntry, MERCHANDISE_ITEMS, MOTORCYCLE_CATEGORIES};

/// A priced catalog entry
#[derive(Debug, Serialize)]
pub struct CatalogEntryResponse {
    pub name: &'static str,
    pub price: u32,
}

impl From<&CatalogEntry> for CatalogEntryResponse {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name,
            price: entry.price,
        }
    }
}

/// GET /catalog/motorcycles
pub async fn list_motorcycle_categories() -> Json<Vec<CatalogEntryResponse>> {
    Json(MOTORCYCLE_CATEGORIES.iter().map(Into::into).collect())
}

/// GET /catalog/merchandise
pub async fn list_merchandise_items() -> Json<Vec<CatalogEntryResponse>> {
    Json(MERCHANDISE_ITEMS.iter().map(Into::into).collect())
}
