//! Logging Infrastructure
//!
//! Human-readable logs on stderr (stdout carries rendered output) plus an
//! optional daily rolling file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level`. A missing `log_dir` is created. Keep the
/// returned guard alive for the lifetime of the program so buffered file logs
/// are flushed. Call once per process.
pub fn init_logger(log_level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(false)
        .with_writer(std::io::stderr);

    let dir_error = log_dir.and_then(|dir| std::fs::create_dir_all(dir).err());
    let file_dir = log_dir.filter(|_| dir_error.is_none());

    let (file_layer, guard) = match file_dir {
        Some(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(rolling::daily(dir, "postal-slip.log"));
            let layer = fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    match (log_dir, dir_error) {
        (Some(dir), Some(e)) => {
            tracing::warn!(
                path = %dir.display(),
                error = %e,
                "Failed to create logs directory, file logging disabled"
            );
        }
        (Some(dir), None) => tracing::info!(path = %dir.display(), "Tracing initialized"),
        (None, _) => tracing::info!("Tracing initialized"),
    }

    guard
}
