//! Form state model
//!
//! Typed paths into the shipment record and the store that owns it.

mod path;
mod store;

pub use path::{AddressField, Edit, FieldPath, FlagPath, Section, TextPath};
pub use store::{FormChange, FormStore, FormSubscription};
