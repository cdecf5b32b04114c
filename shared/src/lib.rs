//! Shared types for the postal slip workspace
//!
//! The shipment record, typed field paths and the form store used by both
//! the editable form and the printable slip.

pub mod error;
pub mod form;
pub mod models;
pub mod util;

// Re-exports
pub use error::{FormError, FormResult};
pub use form::{Edit, FieldPath, FormStore};
pub use models::ShipmentForm;
pub use serde::{Deserialize, Serialize};
