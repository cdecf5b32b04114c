//! Postal Slip desk
//!
//! Edits one shipment record and renders it twice: as the editable form and
//! as the hidden "POTWIERDZENIE NADANIA" slip that gets printed.
//!
//! - `binding`: inputs ↔ record leaves
//! - `core`: session, rendered document, configuration, errors
//! - `utils`: view renderers, stylesheet, printing, logging
//! - `cli`: command line front end

pub use shared;
pub use slip_printer;

pub mod binding;
pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::{DeskConfig, DeskError, DeskResult, Session};
