//! Dealer map handler
//!
//! Serves the static marker list the map widget consumes.

use axum::Json;
use serde::Serialize;

use crate::domain::entities::{DEALERS, MAP_CENTER, MAP_ZOOM};

/// One map marker
#[derive(Debug, Serialize)]
pub struct DealerMarker {
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Popup text for the marker
    pub popup: String,
}

/// The full map-widget feed: viewport plus markers
#[derive(Debug, Serialize)]
pub struct DealerMapResponse {
    pub center: [f64; 2],
    pub zoom: u8,
    pub dealers: Vec<DealerMarker>,
}

/// GET /dealers
pub async fn list_dealers() -> Json<DealerMapResponse> {
    let dealers = DEALERS
        .iter()
        .map(|d| DealerMarker {
            city: d.city,
            latitude: d.latitude,
            longitude: d.longitude,
            popup: format!("Dealer in {}", d.city),
        })
        .collect();

    Json(DealerMapResponse {
        center: [MAP_CENTER.0, MAP_CENTER.1],
        zoom: MAP_ZOOM,
        dealers,
    })
}
