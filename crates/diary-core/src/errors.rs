//! # errors
//!
//! why: give every failure a discrete, caller-distinguishable type
//! relations: returned by diary.rs; wraps storage.rs and export.rs errors
//! what: ValidationError for bad input, DiaryError as the service result type

use thiserror::Error;

use crate::export::HandoffError;
use crate::storage::StorageError;

/// Rejected form input; always correctable by the caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a valid number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Everything a diary operation can fail with
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no entry with id {0}")]
    NotFound(u64),

    #[error("failed to persist the diary: {0}")]
    Persistence(#[from] StorageError),

    #[error("the diary has no entries to export")]
    EmptyExport,

    #[error(transparent)]
    Handoff(#[from] HandoffError),
}
