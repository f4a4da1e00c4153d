use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    /// Path to the ledger backing store (CSV, header row + one row per submission)
    pub ledger_path: PathBuf,
    /// Reject submissions with empty contact fields instead of relying on
    /// the form UI to gate the submit action
    pub require_contact_details: bool,
    /// Persist test-drive and service bookings to the ledger. Off by
    /// default: bookings only produce a confirmation message.
    pub persist_bookings: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            ledger_path: env::var("LEDGER_PATH")
                .unwrap_or_else(|_| "motorcycle_marketplace_data.csv".to_string())
                .into(),
            require_contact_details: env_flag("REQUIRE_CONTACT_DETAILS", true),
            persist_bookings: env_flag("PERSIST_BOOKINGS", false),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
