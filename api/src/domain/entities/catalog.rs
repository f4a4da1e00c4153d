//! Static catalog tables
//!
//! Price tables for motorcycles and merchandise. These are configuration
//! constants fixed at build time, not data-model entities: they are never
//! persisted and never change at runtime.

/// A priced catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub price: u32,
}

/// Motorcycle categories and their prices in USD.
pub const MOTORCYCLE_CATEGORIES: [CatalogEntry; 5] = [
    CatalogEntry {
        name: "Sports",
        price: 15_000,
    },
    CatalogEntry {
        name: "Cruiser",
        price: 18_000,
    },
    CatalogEntry {
        name: "Touring",
        price: 25_000,
    },
    CatalogEntry {
        name: "Off-Road",
        price: 10_000,
    },
    CatalogEntry {
        name: "Adventure",
        price: 30_000,
    },
];

/// Merchandise items and their prices in USD.
pub const MERCHANDISE_ITEMS: [CatalogEntry; 4] = [
    CatalogEntry {
        name: "T-Shirt",
        price: 30,
    },
    CatalogEntry {
        name: "Toy Motorcycle",
        price: 50,
    },
    CatalogEntry {
        name: "Helmet",
        price: 120,
    },
    CatalogEntry {
        name: "Small Electric Motorcycle",
        price: 200,
    },
];

/// Look up the price of a motorcycle category.
pub fn motorcycle_price(category: &str) -> Option<u32> {
    MOTORCYCLE_CATEGORIES
        .iter()
        .find(|e| e.name == category)
        .map(|e| e.price)
}

/// Look up the price of a merchandise item.
pub fn merchandise_price(item: &str) -> Option<u32> {
    MERCHANDISE_ITEMS.iter().find(|e| e.name == item).map(|e| e.price)
}
