//! Slip stylesheet
//!
//! Screen layout plus `@media print` overrides (A4 portrait, no margins).
//! Injected verbatim into both the live page and every print surface.

pub const RECEIPT_CSS: &str = include_str!("../../assets/receipt.css");
