//! Order service
//!
//! The two purchase flows: motorcycles and merchandise. Each one maps
//! form-equivalent input onto a ledger row, appends it, and builds the
//! confirmation shown to the buyer.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{merchandise_price, motorcycle_price, Submission};
use crate::domain::ports::SubmissionLedger;
use crate::error::{AppError, DomainError};

/// Form input for a motorcycle purchase
#[derive(Debug, Clone)]
pub struct MotorcycleOrder {
    pub name: String,
    pub address: String,
    pub delivery_location: String,
    pub category: String,
}

/// Form input for a merchandise purchase
#[derive(Debug, Clone)]
pub struct MerchandiseOrder {
    pub name: String,
    pub address: String,
    pub item: String,
    pub delivery_date: NaiveDate,
}

/// Result of a completed purchase
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub message: String,
    /// The Purchase column value as recorded in the ledger
    pub purchase: String,
    pub price: u32,
    pub delivery_date: String,
}

/// Service for the purchase flows
pub struct OrderService<L>
where
    L: SubmissionLedger,
{
    ledger: Arc<L>,
    require_contact_details: bool,
}

impl<L> OrderService<L>
where
    L: SubmissionLedger,
{
    pub fn new(ledger: Arc<L>, require_contact_details: bool) -> Self {
        Self {
            ledger,
            require_contact_details,
        }
    }

    /// Purchase a motorcycle. Delivery date is the order date.
    pub async fn purchase_motorcycle(
        &self,
        order: MotorcycleOrder,
    ) -> Result<OrderReceipt, AppError> {
        let price = motorcycle_price(&order.category).ok_or_else(|| {
            DomainError::Validation(format!("Unknown motorcycle category: {}", order.category))
        })?;

        if self.require_contact_details {
            require_non_empty("name", &order.name)?;
            require_non_empty("address", &order.address)?;
            require_non_empty("delivery location", &order.delivery_location)?;
        }

        let delivery_date = Utc::now().format("%Y-%m-%d").to_string();
        let row = Submission::motorcycle_purchase(
            &order.name,
            &order.address,
            &order.delivery_location,
            &order.category,
            &delivery_date,
        );
        self.ledger.append(&row).await?;

        tracing::info!(category = %order.category, price, "motorcycle purchase recorded");

        Ok(OrderReceipt {
            message: format!(
                "You have successfully purchased a {} motorcycle for ${}!",
                order.category, price
            ),
            purchase: row.purchase,
            price,
            delivery_date,
        })
    }

    /// Purchase a merchandise item, delivered to the buyer's address.
    pub async fn purchase_merchandise(
        &self,
        order: MerchandiseOrder,
    ) -> Result<OrderReceipt, AppError> {
        let price = merchandise_price(&order.item).ok_or_else(|| {
            DomainError::Validation(format!("Unknown merchandise item: {}", order.item))
        })?;

        if self.require_contact_details {
            require_non_empty("name", &order.name)?;
            require_non_empty("address", &order.address)?;
        }

        let delivery_date = order.delivery_date.format("%Y-%m-%d").to_string();
        let row = Submission::merchandise_purchase(
            &order.name,
            &order.address,
            &order.item,
            &delivery_date,
        );
        self.ledger.append(&row).await?;

        tracing::info!(item = %order.item, price, "merchandise purchase recorded");

        Ok(OrderReceipt {
            message: format!(
                "You have successfully purchased {} for ${}!",
                order.item, price
            ),
            purchase: row.purchase,
            price,
            delivery_date,
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "Field '{}' must not be empty",
            field
        )));
    }
    Ok(())
}
