//! Core session state
//!
//! - `session`: form store + rendered views + print entry point
//! - `document`: mount points of the rendered views
//! - `config`: environment configuration
//! - `error`: application error type

pub mod config;
pub mod document;
pub mod error;
pub mod session;

pub use config::DeskConfig;
pub use document::{FORM_ROOT, PRINTABLE_ROOT, RenderedDocument};
pub use error::{DeskError, DeskResult};
pub use session::Session;
