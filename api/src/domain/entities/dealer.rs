//! Static dealer locations
//!
//! The marker list consumed by the map widget: one `(city, latitude,
//! longitude)` triple per dealer, plus the initial viewport. Read-only,
//! fixed at build time.

/// A dealer location marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dealer {
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// European dealer locations.
pub const DEALERS: [Dealer; 5] = [
    Dealer {
        city: "Berlin, Germany",
        latitude: 52.5200,
        longitude: 13.4050,
    },
    Dealer {
        city: "Paris, France",
        latitude: 48.8566,
        longitude: 2.3522,
    },
    Dealer {
        city: "Rome, Italy",
        latitude: 41.9028,
        longitude: 12.4964,
    },
    Dealer {
        city: "Madrid, Spain",
        latitude: 40.4168,
        longitude: -3.7038,
    },
    Dealer {
        city: "London, UK",
        latitude: 51.5074,
        longitude: -0.1278,
    },
];

/// Initial map viewport, roughly centered on Europe.
pub const MAP_CENTER: (f64, f64) = (54.5260, 15.2551);
pub const MAP_ZOOM: u8 = 4;
