//! Admission check for new tasks.
//!
//! Rules are checked in order and the first failure wins:
//! 1. the trimmed text must not be empty,
//! 2. the raw text must not exceed [`MAX_TASK_TEXT_LENGTH`] characters,
//! 3. no existing task may have the same trimmed text, ignoring case.

use thiserror::Error;

use crate::task::{MAX_TASK_TEXT_LENGTH, Task};

/// Why a candidate task was rejected.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is empty or whitespace only.
    #[error("Task cannot be empty")]
    Empty,
    /// Text is longer than [`MAX_TASK_TEXT_LENGTH`] characters.
    #[error("Task must be less than 100 characters")]
    TooLong,
    /// A task with the same text (ignoring case and surrounding
    /// whitespace) is already present.
    #[error("Task already exists")]
    Duplicate,
}

/// Checks whether `candidate` may be added next to `existing`.
///
/// Length is measured in characters on the untrimmed input, matching the
/// hard cap on the input field.
///
/// # Errors
///
/// Returns the first [`ValidationError`] whose rule `candidate` breaks.
pub fn validate(candidate: &str, existing: &[Task]) -> Result<(), ValidationError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if candidate.chars().count() > MAX_TASK_TEXT_LENGTH {
        return Err(ValidationError::TooLong);
    }

    let needle = trimmed.to_lowercase();
    if existing
        .iter()
        .any(|task| task.text.trim().to_lowercase() == needle)
    {
        return Err(ValidationError::Duplicate);
    }

    Ok(())
}
