//! Motorcycle Marketplace API
//!
//! A form-driven marketplace: catalog browsing, purchase and booking
//! submissions appended to a file-backed ledger, and static dealer markers
//! for the map view. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::CsvSubmissionLedger;
use app::{BookingService, OrderService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService<CsvSubmissionLedger>>,
    pub booking_service: Arc<BookingService<CsvSubmissionLedger>>,
    pub ledger: Arc<CsvSubmissionLedger>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application state from configuration
fn build_state(config: Config) -> AppState {
    let ledger = Arc::new(CsvSubmissionLedger::new(config.ledger_path));

    let order_service = Arc::new(OrderService::new(
        ledger.clone(),
        config.require_contact_details,
    ));

    let booking_service = Arc::new(BookingService::new(
        ledger.clone(),
        config.require_contact_details,
        config.persist_bookings,
    ));

    AppState {
        order_service,
        booking_service,
        ledger,
    }
}

/// Build the router with all routes and middleware
fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Static reference tables
        .route("/catalog/motorcycles", get(handlers::list_motorcycle_categories))
        .route("/catalog/merchandise", get(handlers::list_merchandise_items))
        .route("/dealers", get(handlers::list_dealers))
        // Submission flows
        .route("/orders/motorcycle", post(handlers::order_motorcycle))
        .route("/orders/merchandise", post(handlers::order_merchandise))
        .route("/bookings/test-drive", post(handlers::book_test_drive))
        .route("/bookings/service", post(handlers::book_service_appointment))
        // Ledger read side
        .route("/submissions", get(handlers::list_submissions))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moto_market_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Motorcycle Marketplace API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(ledger = %config.ledger_path.display(), "Using ledger backing store");

    let state = build_state(config);
    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
