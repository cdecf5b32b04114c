//! Desk configuration
//!
//! Read from the environment (a `.env` file is loaded first by the binary);
//! unset or unparsable values fall back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use slip_printer::{DEFAULT_PRINT_TIMEOUT, DEFAULT_SETTLE_DELAY, PrintCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Logo reference rendered on the form and the slip
    pub logo_url: String,
    /// Delay between focusing the print surface and printing it
    pub settle_delay_ms: u64,
    /// Directory for print surface files
    pub output_dir: PathBuf,
    /// Spooler command line run on print, e.g. `lp -d office`
    pub print_command: Option<String>,
    /// Spooler command is killed after this long
    pub print_timeout_ms: u64,
    pub log_level: String,
    /// Daily rolling log files go here when set
    pub log_dir: Option<PathBuf>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            logo_url: "/logo.svg".to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            output_dir: PathBuf::from("./print"),
            print_command: None,
            print_timeout_ms: DEFAULT_PRINT_TIMEOUT.as_millis() as u64,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl DeskConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            logo_url: lookup("SLIP_LOGO_URL").unwrap_or(defaults.logo_url),
            settle_delay_ms: lookup("SLIP_SETTLE_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.settle_delay_ms),
            output_dir: lookup("SLIP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            print_command: lookup("SLIP_PRINT_COMMAND").filter(|v| !v.trim().is_empty()),
            print_timeout_ms: lookup("SLIP_PRINT_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.print_timeout_ms),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn print_timeout(&self) -> Duration {
        Duration::from_millis(self.print_timeout_ms)
    }

    pub fn print_command(&self) -> Option<PrintCommand> {
        self.print_command.as_deref().and_then(PrintCommand::parse)
    }
}
