//! Booking service
//!
//! Test drives and service appointments. Unlike purchases, bookings are
//! confirmed without being written to the ledger unless the
//! `persist_bookings` flag opts in; the `recorded` field in the
//! confirmation keeps that asymmetry visible.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::entities::Submission;
use crate::domain::ports::SubmissionLedger;
use crate::error::{AppError, DomainError};

/// The two appointment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingKind {
    TestDrive,
    ServiceAppointment,
}

impl BookingKind {
    /// The Purchase column value used when bookings are persisted
    pub fn label(&self) -> &'static str {
        match self {
            BookingKind::TestDrive => "Test Drive",
            BookingKind::ServiceAppointment => "Service Appointment",
        }
    }
}

/// Form input for a booking
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Result of a confirmed booking
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub message: String,
    /// Whether the booking was written to the ledger
    pub recorded: bool,
}

/// Service for the booking flows
pub struct BookingService<L>
where
    L: SubmissionLedger,
{
    ledger: Arc<L>,
    require_contact_details: bool,
    persist_bookings: bool,
}

impl<L> BookingService<L>
where
    L: SubmissionLedger,
{
    pub fn new(ledger: Arc<L>, require_contact_details: bool, persist_bookings: bool) -> Self {
        Self {
            ledger,
            require_contact_details,
            persist_bookings,
        }
    }

    pub async fn book_test_drive(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, AppError> {
        self.book(BookingKind::TestDrive, request).await
    }

    pub async fn book_service_appointment(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, AppError> {
        self.book(BookingKind::ServiceAppointment, request).await
    }

    async fn book(
        &self,
        kind: BookingKind,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, AppError> {
        if self.require_contact_details {
            if request.name.trim().is_empty() {
                return Err(
                    DomainError::Validation("Field 'name' must not be empty".to_string()).into(),
                );
            }
            if request.email.trim().is_empty() {
                return Err(
                    DomainError::Validation("Field 'email' must not be empty".to_string()).into(),
                );
            }
        }

        let date = request.date.format("%Y-%m-%d").to_string();
        let recorded = if self.persist_bookings {
            let row = Submission::booking(kind.label(), &request.name, &request.email, &date);
            self.ledger.append(&row).await?;
            true
        } else {
            false
        };

        tracing::info!(kind = kind.label(), recorded, "booking confirmed");

        let message = match kind {
            BookingKind::TestDrive => format!(
                "Test drive booked for {} on {} at {}. Confirmation sent to {}.",
                request.name,
                date,
                request.time.format("%H:%M"),
                request.email
            ),
            BookingKind::ServiceAppointment => format!(
                "Service appointment booked for {} on {} at {}. Confirmation sent to {}.",
                request.name,
                date,
                request.time.format("%H:%M"),
                request.email
            ),
        };

        Ok(BookingConfirmation { message, recorded })
    }
}
