//! Submission ledger read handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::Submission;
use crate::domain::ports::SubmissionLedger;
use crate::error::AppError;
use crate::AppState;

/// One ledger row as returned by the API
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub name: String,
    pub email: String,
    pub address: String,
    pub purchase: String,
    pub delivery_location: String,
    pub delivery_date: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(row: Submission) -> Self {
        Self {
            name: row.name,
            email: row.email,
            address: row.address,
            purchase: row.purchase,
            delivery_location: row.delivery_location,
            delivery_date: row.delivery_date,
        }
    }
}

/// GET /submissions
///
/// The full ledger in insertion order.
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let rows = state.ledger.load().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
