//! Purchase handlers
//!
//! Endpoints for the motorcycle and merchandise purchase flows.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app::{MerchandiseOrder, MotorcycleOrder};
use crate::error::AppError;
use crate::AppState;

/// Request to purchase a motorcycle.
///
/// String fields default to empty so a partially filled form still maps to
/// a complete six-field record; whether empty fields are rejected is a
/// service-level configuration choice, not a deserialization concern.
#[derive(Debug, Deserialize)]
pub struct MotorcycleOrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub delivery_location: String,
    pub category: String,
}

/// Request to purchase a merchandise item
#[derive(Debug, Deserialize)]
pub struct MerchandiseOrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub item: String,
    pub delivery_date: NaiveDate,
}

/// Response for a completed purchase
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: String,
    pub purchase: String,
    pub price: u32,
    pub delivery_date: String,
}

/// POST /orders/motorcycle
///
/// Purchase a motorcycle. The submission is appended to the ledger.
pub async fn order_motorcycle(
    State(state): State<AppState>,
    Json(request): Json<MotorcycleOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let receipt = state
        .order_service
        .purchase_motorcycle(MotorcycleOrder {
            name: request.name,
            address: request.address,
            delivery_location: request.delivery_location,
            category: request.category,
        })
        .await?;

    Ok(Json(OrderResponse {
        message: receipt.message,
        purchase: receipt.purchase,
        price: receipt.price,
        delivery_date: receipt.delivery_date,
    }))
}

/// POST /orders/merchandise
///
/// Purchase a merchandise item. The submission is appended to the ledger.
pub async fn order_merchandise(
    State(state): State<AppState>,
    Json(request): Json<MerchandiseOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let receipt = state
        .order_service
        .purchase_merchandise(MerchandiseOrder {
            name: request.name,
            address: request.address,
            item: request.item,
            delivery_date: request.delivery_date,
        })
        .await?;

    Ok(Json(OrderResponse {
        message: receipt.message,
        purchase: receipt.purchase,
        price: receipt.price,
        delivery_date: receipt.delivery_date,
    }))
}
