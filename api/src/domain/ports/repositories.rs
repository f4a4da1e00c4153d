//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the CSV file ledger).

use async_trait::async_trait;

use crate::domain::entities::Submission;
use crate::error::DomainError;

/// The append-only submission ledger.
///
/// The backing store is the single source of truth: implementations reload
/// it on every call rather than holding a long-lived in-process copy, so a
/// single-writer deployment needs no synchronization at all.
#[async_trait]
pub trait SubmissionLedger: Send + Sync {
    /// Load the full ledger in insertion order.
    ///
    /// A missing store yields an empty ledger. A store that exists but
    /// cannot be parsed is `StorageUnavailable` and must propagate to the
    /// caller; there is no recovery path.
    async fn load(&self) -> Result<Vec<Submission>, DomainError>;

    /// Append one submission and persist the entire ledger.
    ///
    /// Logically an append, physically a full rewrite of the store, so
    /// every write leaves the file self-contained. Write failures are
    /// `WriteFailure` and are never retried.
    async fn append(&self, submission: &Submission) -> Result<(), DomainError>;
}
