//! Adapters
//!
//! Concrete implementations of domain ports.

pub mod csv;

pub use self::csv::CsvSubmissionLedger;
