//! Error types for the trace store.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by store, preprocessor and export operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage engine rejected a statement or transaction command.
    /// `message` is the engine's last-error text.
    #[error("storage engine error: {message}")]
    Engine { message: String },

    /// A single-row lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A caller-supplied range is inverted or out of bounds.
    #[error("invalid {what} range: [{start}, {end}]")]
    InvalidRange {
        what: &'static str,
        start: String,
        end: String,
    },

    /// A record failed validation before reaching the engine.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Transaction commands issued in the wrong state.
    #[error("transaction misuse: {0}")]
    TransactionMisuse(String),

    /// A best-effort batch finished with some failed sub-operations.
    #[error("{failed} of {attempted} operations failed: {}", .failures.join("; "))]
    PartialBatchFailure {
        failed: usize,
        attempted: usize,
        failures: Vec<String>,
    },

    /// A stored value could not be decoded into its record field.
    #[error("failed to decode column {column}: {message}")]
    Decode { column: String, message: String },

    /// Export refused to overwrite an existing file.
    #[error("export target already exists: {}", .0.display())]
    ExportTargetExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn invalid_range<T: ToString>(what: &'static str, start: T, end: T) -> Self {
        StoreError::InvalidRange {
            what,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        StoreError::NotFound(what.into())
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Engine {
            message: err.to_string(),
        }
    }
}

/// Accumulates the outcome of best-effort sub-operations.
///
/// Every sub-operation is attempted; `finish` reports the aggregate.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    attempted: usize,
    failures: Vec<String>,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sub-operation result, labelled for the failure report.
    pub fn record<T>(&mut self, label: impl AsRef<str>, result: Result<T>) -> Option<T> {
        self.attempted += 1;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("{} failed: {}", label.as_ref(), err);
                self.failures.push(format!("{}: {}", label.as_ref(), err));
                None
            }
        }
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn finish(self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(StoreError::PartialBatchFailure {
                failed: self.failures.len(),
                attempted: self.attempted,
                failures: self.failures,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_outcome_all_ok() {
        let mut outcome = BatchOutcome::new();
        outcome.record("first", Ok(()));
        outcome.record("second", Ok(1));
        assert_eq!(outcome.attempted(), 2);
        assert!(outcome.finish().is_ok());
    }

    #[test]
    fn test_batch_outcome_reports_failures() {
        let mut outcome = BatchOutcome::new();
        outcome.record("first", Ok(()));
        outcome.record::<()>("second", Err(StoreError::not_found("row")));
        outcome.record("third", Ok(()));

        match outcome.finish() {
            Err(StoreError::PartialBatchFailure {
                failed,
                attempted,
                failures,
            }) => {
                assert_eq!(failed, 1);
                assert_eq!(attempted, 3);
                assert!(failures[0].starts_with("second"));
            }
            other => panic!("expected PartialBatchFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_error_carries_message() {
        let err: StoreError = rusqlite::Error::InvalidQuery.into();
        match err {
            StoreError::Engine { message } => assert!(!message.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
