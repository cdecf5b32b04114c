//! Print export pipeline
//!
//! Copies the rendered slip and its stylesheet into a fresh surface, lets it
//! settle, then prints and closes it. The pipeline only reads the source.

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::error::{PrintError, PrintResult};
use crate::host::{PrintHost, PrintSurface, SurfaceRequest};

/// Delay between focusing the surface and printing it
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Anything that can hand over the rendered slip markup
pub trait ReceiptSource {
    /// Inner markup of the mounted slip, `None` when it is not mounted
    fn receipt_markup(&self) -> Option<&str>;
}

impl ReceiptSource for str {
    fn receipt_markup(&self) -> Option<&str> {
        Some(self)
    }
}

impl ReceiptSource for Option<String> {
    fn receipt_markup(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub surface_name: String,
    pub bytes_written: usize,
}

/// One print export
#[derive(Debug, Clone)]
pub struct ExportJob<'a> {
    stylesheet: &'a str,
    request: SurfaceRequest,
    settle_delay: Duration,
}

impl<'a> ExportJob<'a> {
    pub fn new(stylesheet: &'a str, request: SurfaceRequest) -> Self {
        Self {
            stylesheet,
            request,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Document chunks written to the surface, in order
    fn document_parts<'m>(&'m self, markup: &'m str) -> [&'m str; 7] {
        [
            "<html><head><title>Print</title>",
            "<style>",
            self.stylesheet,
            "</style>",
            "</head><body>",
            markup,
            "</body></html>",
        ]
    }

    /// Every step between open and close; the caller closes the surface
    /// whatever the outcome
    async fn fill_and_print<F: PrintSurface>(
        &self,
        surface: &mut F,
        markup: &str,
    ) -> PrintResult<usize> {
        let mut bytes_written = 0;
        for part in self.document_parts(markup) {
            surface.write(part)?;
            bytes_written += part.len();
        }
        surface.finalize()?;
        surface.focus()?;

        tokio::time::sleep(self.settle_delay).await;

        surface.print().await?;
        Ok(bytes_written)
    }

    /// Run the export against `host`
    ///
    /// Fails with [`PrintError::TargetMissing`] before touching the host when
    /// the slip is not mounted, and with [`PrintError::SurfaceBlocked`] when the
    /// host refuses to open a surface. An opened surface is always closed; the
    /// first error wins.
    #[instrument(skip_all, fields(name = %self.request.name))]
    pub async fn run<S, H>(&self, source: &S, host: &H) -> PrintResult<ExportReport>
    where
        S: ReceiptSource + ?Sized,
        H: PrintHost,
    {
        let Some(markup) = source.receipt_markup() else {
            warn!("Printable slip not mounted, nothing to print");
            return Err(PrintError::TargetMissing("printable slip not mounted".to_string()));
        };

        let Some(mut surface) = host.open(&self.request) else {
            warn!(features = %self.request.geometry, "Print surface could not be opened");
            return Err(PrintError::SurfaceBlocked(self.request.name.clone()));
        };

        let printed = self.fill_and_print(&mut surface, markup).await;
        let closed = surface.close();
        let bytes_written = printed?;
        closed?;

        info!(bytes_written, "Slip sent to print surface");
        Ok(ExportReport {
            surface_name: self.request.name.clone(),
            bytes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryHost, MemorySurface, SurfaceEvent};

    const CSS: &str = ".form-container { border: 1px solid #000; }";

    #[tokio::test(start_paused = true)]
    async fn test_export_writes_style_then_markup() {
        let host = MemoryHost::new();
        let job = ExportJob::new(CSS, SurfaceRequest::print_preview("Print1"));

        let report = job.run("<div>RR123</div>", &host).await.unwrap();

        let printed = host.printed();
        assert_eq!(printed.len(), 1);
        assert_eq!(
            printed[0].document,
            format!(
                "<html><head><title>Print</title><style>{CSS}</style></head>\
                 <body><div>RR123</div></body></html>"
            )
        );
        assert_eq!(report.bytes_written, printed[0].document.len());
        assert_eq!(report.surface_name, "Print1");
    }

    #[tokio::test]
    async fn test_missing_target_touches_nothing() {
        let host = MemoryHost::new();
        let job = ExportJob::new(CSS, SurfaceRequest::print_preview("Print2"));

        let err = job.run(&None::<String>, &host).await.unwrap_err();
        assert!(matches!(err, PrintError::TargetMissing(_)));
        assert_eq!(host.operation_count(), 0);
    }

    #[tokio::test]
    async fn test_blocked_host_reported() {
        let host = MemoryHost::blocked();
        let job = ExportJob::new(CSS, SurfaceRequest::print_preview("Print3"));

        let err = job.run("<div></div>", &host).await.unwrap_err();
        assert!(matches!(err, PrintError::SurfaceBlocked(ref name) if name == "Print3"));
        assert!(host.printed().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_print_waits_for_settle_delay() {
        let host = MemoryHost::new();
        let job = ExportJob::new(CSS, SurfaceRequest::print_preview("Print4"))
            .with_settle_delay(Duration::from_millis(250));

        let started = tokio::time::Instant::now();
        job.run("<p>x</p>", &host).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));

        let events: Vec<_> = host.events().into_iter().map(|(_, e)| e).collect();
        let focused = events.iter().position(|e| *e == SurfaceEvent::Focused).unwrap();
        let printed = events.iter().position(|e| *e == SurfaceEvent::Printed).unwrap();
        assert!(focused < printed);
        assert_eq!(events.last(), Some(&SurfaceEvent::Closed));
    }

    /// Surface that rejects every write
    struct ReadOnlyHost(MemoryHost);

    struct ReadOnlySurface(MemorySurface);

    impl PrintHost for ReadOnlyHost {
        type Surface = ReadOnlySurface;

        fn open(&self, request: &SurfaceRequest) -> Option<ReadOnlySurface> {
            self.0.open(request).map(ReadOnlySurface)
        }
    }

    impl PrintSurface for ReadOnlySurface {
        fn name(&self) -> &str {
            self.0.name()
        }

        fn write(&mut self, _text: &str) -> PrintResult<()> {
            Err(PrintError::SurfaceState(format!("{}: read only", self.name())))
        }

        fn finalize(&mut self) -> PrintResult<()> {
            self.0.finalize()
        }

        fn focus(&mut self) -> PrintResult<()> {
            self.0.focus()
        }

        async fn print(&mut self) -> PrintResult<()> {
            self.0.print().await
        }

        fn close(self) -> PrintResult<()> {
            self.0.close()
        }
    }

    #[tokio::test]
    async fn test_failed_write_still_closes_surface() {
        let host = ReadOnlyHost(MemoryHost::new());
        let job = ExportJob::new(CSS, SurfaceRequest::print_preview("Print5"));

        let err = job.run("<p>x</p>", &host).await.unwrap_err();
        assert!(matches!(err, PrintError::SurfaceState(_)));

        let events: Vec<_> = host.0.events().into_iter().map(|(_, e)| e).collect();
        assert_eq!(events, vec![SurfaceEvent::Opened, SurfaceEvent::Closed]);
        assert!(host.0.printed().is_empty());
    }
}
