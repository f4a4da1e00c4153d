//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The ledger port is small enough that a hand-written in-memory mock is
//! clearer than anything macro-generated.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
