//! Error types for task operations.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur during task operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// A candidate task was refused admission to the store.
    #[error(transparent)]
    ValidationRejected(#[from] ValidationError),
    /// A view parameter or similar argument was not recognized.
    #[error("invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidArgument {
        /// What was being parsed (e.g. "filter").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated accepted values.
        expected: &'static str,
    },
}
