//! File print host
//!
//! Each surface becomes `<dir>/<name>.html`. Printing hands the file to a
//! spooler command (e.g. `lp`), or only logs its location when none is set.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

use crate::error::{PrintError, PrintResult};
use crate::host::{PrintHost, PrintSurface, SurfaceRequest};

/// How long the spooler command may run before it is killed
pub const DEFAULT_PRINT_TIMEOUT: Duration = Duration::from_secs(30);

/// Spooler command line, split into program and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    program: String,
    args: Vec<String>,
}

impl PrintCommand {
    /// Parse a shell-style command line; `None` when blank or badly quoted
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = shlex::split(line)?.into_iter();
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Print host writing surfaces to a directory
#[derive(Debug, Clone)]
pub struct FileHost {
    dir: PathBuf,
    command: Option<PrintCommand>,
    timeout: Duration,
}

impl FileHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: None,
            timeout: DEFAULT_PRINT_TIMEOUT,
        }
    }

    /// Run `command <file>` when a surface is printed
    pub fn with_command(mut self, command: Option<PrintCommand>) -> Self {
        self.command = command;
        self
    }

    /// Set spooler command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn surface_path(&self, name: &str) -> PathBuf {
        let file_name: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.html"))
    }
}

impl PrintHost for FileHost {
    type Surface = FileSurface;

    #[instrument(skip(self, request), fields(dir = %self.dir.display(), name = %request.name))]
    fn open(&self, request: &SurfaceRequest) -> Option<FileSurface> {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(error = %e, "cannot create output directory");
            return None;
        }

        let path = self.surface_path(&request.name);
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "cannot create surface file");
                return None;
            }
        };

        info!(path = %path.display(), "surface opened");
        Some(FileSurface {
            name: request.name.clone(),
            path,
            writer: Some(BufWriter::new(file)),
            command: self.command.clone(),
            timeout: self.timeout,
        })
    }
}

/// Surface opened by [`FileHost`]
#[derive(Debug)]
pub struct FileSurface {
    name: String,
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    command: Option<PrintCommand>,
    timeout: Duration,
}

impl FileSurface {
    /// File backing this surface
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSurface for FileSurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, text: &str) -> PrintResult<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            PrintError::SurfaceState(format!("{}: document stream already closed", self.name))
        })?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn finalize(&mut self) -> PrintResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        debug!(path = %self.path.display(), "document finalized");
        Ok(())
    }

    fn focus(&mut self) -> PrintResult<()> {
        debug!(name = %self.name, "surface focused");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn print(&mut self) -> PrintResult<()> {
        if self.writer.is_some() {
            return Err(PrintError::SurfaceState(format!(
                "{}: print before document was finalized",
                self.name
            )));
        }

        let Some(command) = &self.command else {
            info!("No print command configured, document kept on disk");
            return Ok(());
        };

        info!(program = %command.program, "Sending document to spooler");
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .arg(&self.path)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PrintError::Command(format!("{}: {}", command.program, e)))?;

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => {
                status.map_err(|e| PrintError::Command(format!("{}: {}", command.program, e)))?
            }
            Err(_) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!(timeout_ms, "Spooler timed out, killing it");
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "Failed to kill spooler");
                }
                return Err(PrintError::Command(format!("{} timed out", command.program)));
            }
        };

        if !status.success() {
            return Err(PrintError::Command(format!(
                "{} exited with {}",
                command.program, status
            )));
        }

        info!("Print job sent successfully");
        Ok(())
    }

    fn close(self) -> PrintResult<()> {
        debug!(name = %self.name, "surface closed");
        Ok(())
    }
}
