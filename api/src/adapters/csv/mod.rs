//! CSV file adapters
//!
//! Implementations of repository traits backed by a tabular file on disk.

pub mod submission_ledger;

pub use submission_ledger::CsvSubmissionLedger;
