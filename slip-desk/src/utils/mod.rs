//! Utility module for rendering and infrastructure code.

pub mod form_view;
pub mod logger;
pub mod printing;
pub mod receipt_renderer;
pub mod stylesheet;
