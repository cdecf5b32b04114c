//! Data models
//!
//! The shipment record edited by the form and printed on the slip.

pub mod shipment;

// Re-exports
pub use shipment::*;
