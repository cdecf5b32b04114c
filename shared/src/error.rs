//! Error types for the shared crate

use thiserror::Error;

/// Errors raised while addressing or parsing form fields
///
/// Applying an [`Edit`](crate::form::Edit) never fails; these only come from
/// turning untyped input (dotted paths, raw strings) into typed edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Dotted path does not name a form leaf
    #[error("Unknown field path: {0}")]
    UnknownPath(String),

    /// Parcel size outside S / M / L
    #[error("Unknown parcel size: {0} (expected S, M or L)")]
    UnknownSize(String),

    /// Value for a checkbox leaf is not a recognizable boolean
    #[error("Invalid flag value for {path}: {value}")]
    InvalidFlag { path: String, value: String },
}

/// Result type for form addressing
pub type FormResult<T> = Result<T, FormError>;
