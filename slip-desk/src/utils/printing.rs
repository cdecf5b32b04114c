//! Printing - delegates to slip-printer
//!
//! High-level printing API for the desk: pick a host from the configuration
//! and run the export for the session's slip.

use std::time::Duration;

use slip_printer::{ExportReport, FileHost, MemoryHost};
use tracing::{info, instrument};

use crate::core::{DeskConfig, DeskError, DeskResult, Session};

/// Export the slip to a surface file under the configured output directory
/// and hand it to the configured spooler command
#[instrument(skip_all, fields(dir = %config.output_dir.display()))]
pub async fn print_slip(session: &Session, config: &DeskConfig) -> DeskResult<ExportReport> {
    let host = FileHost::new(&config.output_dir)
        .with_command(config.print_command())
        .with_timeout(config.print_timeout());
    let report = session.print(&host, config.settle_delay()).await?;
    info!(surface = %report.surface_name, bytes = report.bytes_written, "slip printed");
    Ok(report)
}

/// Document a print surface would receive, without any side effects
#[instrument(skip_all)]
pub async fn preview_slip(session: &Session) -> DeskResult<String> {
    let host = MemoryHost::new();
    session.print(&host, Duration::ZERO).await?;
    host.printed()
        .pop()
        .map(|p| p.document)
        .ok_or_else(|| DeskError::InvalidArgument("preview produced no document".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::form::{Edit, TextPath};

    #[tokio::test]
    async fn test_preview_contains_style_and_slip() {
        let mut session = Session::new("/logo.svg");
        session.apply(Edit::Text(TextPath::TrackingNumber, "RR987654321PL".into()));

        let document = preview_slip(&session).await.unwrap();
        assert!(document.starts_with("<html><head><title>Print</title><style>"));
        assert!(document.contains(session.stylesheet()));
        assert!(document.contains("RR987654321PL"));
    }

    #[tokio::test]
    async fn test_print_slip_writes_surface_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig {
            output_dir: dir.path().join("out"),
            settle_delay_ms: 0,
            ..DeskConfig::default()
        };
        let session = Session::new("/logo.svg");

        let report = print_slip(&session, &config).await.unwrap();
        let file = config.output_dir.join(format!("{}.html", report.surface_name));
        let written = std::fs::read_to_string(file).unwrap();
        assert_eq!(written.len(), report.bytes_written);
        assert!(written.contains("POTWIERDZENIE NADANIA"));
    }
}
