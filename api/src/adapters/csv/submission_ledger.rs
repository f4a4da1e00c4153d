//! CSV file adapter for SubmissionLedger
//!
//! The ledger is a single CSV file: a header row with the six column names
//! followed by one row per submission. Each append rewrites the whole file,
//! so the store is always self-contained even if an earlier write was
//! interrupted. The O(n) rewrite cost is accepted; there is one writer and
//! the table stays small.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::Submission;
use crate::domain::ports::SubmissionLedger;
use crate::error::DomainError;

/// File-backed implementation of SubmissionLedger
pub struct CsvSubmissionLedger {
    path: PathBuf,
}

impl CsvSubmissionLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row of the store. A missing file is an empty ledger;
    /// anything unparseable is `StorageUnavailable`.
    pub fn read_all(&self) -> Result<Vec<Submission>, DomainError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: Submission =
                result.map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Overwrite the store with the full ordered row set, header included.
    pub fn write_all(&self, rows: &[Submission]) -> Result<(), DomainError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| DomainError::WriteFailure(e.to_string()))?;

        // Header is written explicitly so an empty ledger still has one
        writer
            .write_record(Submission::COLUMNS)
            .map_err(|e| DomainError::WriteFailure(e.to_string()))?;

        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| DomainError::WriteFailure(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| DomainError::WriteFailure(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SubmissionLedger for CsvSubmissionLedger {
    async fn load(&self) -> Result<Vec<Submission>, DomainError> {
        self.read_all()
    }

    async fn append(&self, submission: &Submission) -> Result<(), DomainError> {
        // Reload before append: the file is the source of truth, not memory
        let mut rows = self.read_all()?;
        rows.push(submission.clone());
        self.write_all(&rows)
    }
}
