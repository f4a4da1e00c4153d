//! Booking handlers
//!
//! Endpoints for test-drive and service-appointment bookings.

use axum::{extract::State, Json};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::app::BookingRequest;
use crate::error::AppError;
use crate::AppState;

/// Request to book a test drive or service appointment
#[derive(Debug, Deserialize)]
pub struct BookingApiRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub date: NaiveDate,
    /// "HH:MM" or "HH:MM:SS"
    pub time: String,
}

/// Response for a confirmed booking
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: String,
    pub recorded: bool,
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::BadRequest(format!("Invalid time: {}", value)))
}

/// POST /bookings/test-drive
pub async fn book_test_drive(
    State(state): State<AppState>,
    Json(request): Json<BookingApiRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let time = parse_time(&request.time)?;

    let confirmation = state
        .booking_service
        .book_test_drive(BookingRequest {
            name: request.name,
            email: request.email,
            date: request.date,
            time,
        })
        .await?;

    Ok(Json(BookingResponse {
        message: confirmation.message,
        recorded: confirmation.recorded,
    }))
}

/// POST /bookings/service
pub async fn book_service_appointment(
    State(state): State<AppState>,
    Json(request): Json<BookingApiRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let time = parse_time(&request.time)?;

    let confirmation = state
        .booking_service
        .book_service_appointment(BookingRequest {
            name: request.name,
            email: request.email,
            date: request.date,
            time,
        })
        .await?;

    Ok(Json(BookingResponse {
        message: confirmation.message,
        recorded: confirmation.recorded,
    }))
}
