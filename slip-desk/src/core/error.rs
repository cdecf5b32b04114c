//! Application error types

use shared::FormError;
use slip_printer::PrintError;
use thiserror::Error;

use crate::binding::BindingError;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Print(#[from] PrintError),

    #[error("Invalid shipment JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type DeskResult<T> = Result<T, DeskError>;
