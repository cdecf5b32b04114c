//! Command line front end
//!
//! Loads an optional record, applies `--set path=value` edits in order and
//! renders or prints the result.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use shared::form::{Edit, FieldPath};
use shared::models::ShipmentForm;
use tracing::info;

use crate::core::{DeskConfig, DeskError, DeskResult, Session};
use crate::utils::printing::{preview_slip, print_slip};

#[derive(Debug, Parser)]
#[command(name = "postal-slip", version, about = "Fill in and print a posting confirmation slip")]
pub struct Cli {
    /// JSON file with a shipment record to start from
    #[arg(long, value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// Field edit, e.g. --set sender.name="Jan Kowalski" (repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub set: Vec<String>,

    /// Logo reference shown on the form and the slip
    #[arg(long)]
    pub logo_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the document a print surface would receive to stdout
    Preview,
    /// Write the full page (editable form and slip) to stdout
    Page,
    /// Write the shipment record as JSON to stdout
    Json,
    /// Export the slip to a surface file and send it to the spooler
    Print {
        /// Directory for surface files
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Spooler command line, e.g. "lp -d office"
        #[arg(long)]
        command: Option<String>,
        /// Delay before printing, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List every editable field path
    Fields,
}

impl Cli {
    /// Layer command line overrides on top of the environment configuration
    pub fn apply_overrides(&self, mut config: DeskConfig) -> DeskConfig {
        if let Some(logo) = &self.logo_url {
            config.logo_url = logo.clone();
        }
        if let Command::Print {
            output_dir,
            command,
            delay_ms,
        } = &self.command
        {
            if let Some(dir) = output_dir {
                config.output_dir = dir.clone();
            }
            if let Some(cmd) = command {
                config.print_command = Some(cmd.clone());
            }
            if let Some(ms) = delay_ms {
                config.settle_delay_ms = *ms;
            }
        }
        config
    }
}

/// Parse one `path=value` assignment into an edit
pub fn parse_assignment(arg: &str) -> DeskResult<Edit> {
    let (path, value) = arg
        .split_once('=')
        .ok_or_else(|| DeskError::InvalidArgument(format!("expected PATH=VALUE, got {arg}")))?;
    let path: FieldPath = path.trim().parse()?;
    Ok(path.with_value(value)?)
}

/// Read a shipment record from a JSON file
pub fn load_form(path: &Path) -> DeskResult<ShipmentForm> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Build the session described by the command line
pub fn build_session(cli: &Cli, config: &DeskConfig) -> DeskResult<Session> {
    let form = match &cli.form {
        Some(path) => load_form(path)?,
        None => ShipmentForm::default(),
    };
    let edits = cli
        .set
        .iter()
        .map(|arg| parse_assignment(arg))
        .collect::<DeskResult<Vec<_>>>()?;

    let mut session = Session::with_form(form, config.logo_url.clone());
    for edit in edits {
        session.apply(edit);
    }
    Ok(session)
}

pub async fn run(cli: Cli, config: DeskConfig, out: &mut impl Write) -> DeskResult<()> {
    let session = build_session(&cli, &config)?;
    info!(edits = session.revision(), "session ready");

    match cli.command {
        Command::Preview => {
            out.write_all(preview_slip(&session).await?.as_bytes())?;
        }
        Command::Page => {
            out.write_all(session.document().to_html(session.stylesheet()).as_bytes())?;
        }
        Command::Json => {
            serde_json::to_writer_pretty(&mut *out, session.form().as_ref())?;
            writeln!(out)?;
        }
        Command::Print { .. } => {
            let report = print_slip(&session, &config).await?;
            writeln!(out, "{}", report.surface_name)?;
        }
        Command::Fields => {
            for path in FieldPath::all() {
                writeln!(out, "{path}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::form::{FlagPath, TextPath};

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("trackingNumber=RR1=2").unwrap(),
            Edit::Text(TextPath::TrackingNumber, "RR1=2".into())
        );
        assert_eq!(
            parse_assignment("options.priority=yes").unwrap(),
            Edit::Flag(FlagPath::Priority, true)
        );
        assert!(matches!(parse_assignment("sender.name"), Err(DeskError::InvalidArgument(_))));
        assert!(matches!(parse_assignment("sender.nick=x"), Err(DeskError::Form(_))));
    }

    #[test]
    fn test_overrides_only_for_print() {
        let cli = Cli::try_parse_from([
            "postal-slip",
            "--logo-url",
            "/pp.svg",
            "print",
            "--delay-ms",
            "10",
            "--command",
            "lp",
        ])
        .unwrap();
        let config = cli.apply_overrides(DeskConfig::default());
        assert_eq!(config.logo_url, "/pp.svg");
        assert_eq!(config.settle_delay_ms, 10);
        assert_eq!(config.print_command.as_deref(), Some("lp"));

        let cli = Cli::try_parse_from(["postal-slip", "preview"]).unwrap();
        assert_eq!(cli.apply_overrides(DeskConfig::default()), DeskConfig::default());
    }

    #[tokio::test]
    async fn test_json_output_after_edits() {
        let cli = Cli::try_parse_from([
            "postal-slip",
            "--set",
            "recipient.country=Niemcy",
            "--set",
            "options.size=S",
            "json",
        ])
        .unwrap();

        let mut out = Vec::new();
        run(cli, DeskConfig::default(), &mut out).await.unwrap();
        let form: ShipmentForm = serde_json::from_slice(&out).unwrap();
        assert_eq!(form.recipient.country, "Niemcy");
        assert_eq!(form.size(), shared::models::ParcelSize::S);
    }

    #[tokio::test]
    async fn test_bad_edit_aborts_before_output() {
        let cli = Cli::try_parse_from(["postal-slip", "--set", "options.size=XL", "page"]).unwrap();
        let mut out = Vec::new();
        assert!(run(cli, DeskConfig::default(), &mut out).await.is_err());
        assert!(out.is_empty());
    }
}
