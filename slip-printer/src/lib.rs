//! # slip-printer
//!
//! Print surface library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Markup building with HTML escaping
//! - Print surface capability (open / write / finalize / focus / print / close)
//! - Headless in-memory surfaces
//! - HTML file surfaces with an optional spooler command
//! - The export pipeline (style injection, settle delay, print, close)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Slip and form rendering → slip-desk
//!
//! ## Example
//!
//! ```ignore
//! use slip_printer::{ExportJob, FileHost, PrintCommand, SurfaceRequest};
//!
//! let host = FileHost::new("./print").with_command(PrintCommand::parse("lp"));
//! let job = ExportJob::new(RECEIPT_CSS, SurfaceRequest::print_preview("Print1"));
//! job.run(markup.as_str(), &host).await?;
//! ```

mod error;
mod escape;
mod export;
mod file;
mod host;
mod markup;
mod memory;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escape::{escape_attr, escape_text};
pub use export::{DEFAULT_SETTLE_DELAY, ExportJob, ExportReport, ReceiptSource};
pub use file::{DEFAULT_PRINT_TIMEOUT, FileHost, FileSurface, PrintCommand};
pub use host::{PrintHost, PrintSurface, SurfaceGeometry, SurfaceRequest};
pub use markup::MarkupBuilder;
pub use memory::{MemoryHost, MemorySurface, PrintedDocument, SurfaceEvent};
