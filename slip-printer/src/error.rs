//! Error types for the print library

use thiserror::Error;

/// Print export error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// The rendered slip is not mounted in the document
    #[error("Print target missing: {0}")]
    TargetMissing(String),

    /// The host refused to open a print surface
    #[error("Print surface blocked: {0}")]
    SurfaceBlocked(String),

    /// IO error while writing or printing a surface
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Spooler command failed
    #[error("Print command failed: {0}")]
    Command(String),

    /// Surface operation after it was closed or before it was finalized
    #[error("Invalid surface state: {0}")]
    SurfaceState(String),
}

/// Result type for print operations
pub type PrintResult<T> = Result<T, PrintError>;
