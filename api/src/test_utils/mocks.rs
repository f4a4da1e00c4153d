//! Mock implementations of port traits
//!
//! In-memory ledger for unit tests. Stores rows behind an RwLock and can
//! be switched into a failing mode to exercise error propagation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::Submission;
use crate::domain::ports::SubmissionLedger;
use crate::error::DomainError;

/// In-memory SubmissionLedger
#[derive(Default)]
pub struct InMemoryLedger {
    rows: Arc<RwLock<Vec<Submission>>>,
    fail_writes: bool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a submission for testing
    pub fn with_submission(self, submission: Submission) -> Self {
        self.rows.write().unwrap().push(submission);
        self
    }

    /// Every append returns `WriteFailure`
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

#[async_trait]
impl SubmissionLedger for InMemoryLedger {
    async fn load(&self) -> Result<Vec<Submission>, DomainError> {
        Ok(self.rows.read().unwrap().clone())
    }

    async fn append(&self, submission: &Submission) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::WriteFailure("simulated disk full".to_string()));
        }
        self.rows.write().unwrap().push(submission.clone());
        Ok(())
    }
}
