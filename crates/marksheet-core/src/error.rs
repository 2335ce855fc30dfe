//! # Errors
//!
//! Every failure the core can report. None of these are fatal: validation
//! errors go back to the user as a message and store errors reject a single
//! action.

use thiserror::Error;

/// A submission failed one of the input rules.
///
/// Rules are checked in order (name, age, marks) and only the first failure
/// is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name should only contain letters and spaces.")]
    InvalidName,

    #[error("Age should be a positive integer between 1 and 100.")]
    InvalidAge,

    /// Whole-batch failure; the offending subject is not identified.
    #[error("All marks must be between 0 and 100.")]
    InvalidMarks,
}

/// An index did not address a record in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record index {index} is out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failure of a single form action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("mark field {0} does not exist (expected 1-5)")]
    NoSuchMarkField(usize),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
