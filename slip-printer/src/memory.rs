//! Headless print host
//!
//! Keeps every surface operation and printed document in memory. Used for
//! previews without a display and for observing the export pipeline.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::{PrintError, PrintResult};
use crate::host::{PrintHost, PrintSurface, SurfaceRequest};

/// One observed surface operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Opened,
    Refused,
    Write(usize),
    Finalized,
    Focused,
    Printed,
    Closed,
}

/// Document that reached the print step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedDocument {
    pub name: String,
    pub document: String,
}

#[derive(Debug, Default)]
struct MemoryLog {
    events: Vec<(String, SurfaceEvent)>,
    printed: Vec<PrintedDocument>,
}

impl MemoryLog {
    fn record(&mut self, name: &str, event: SurfaceEvent) {
        self.events.push((name.to_string(), event));
    }
}

/// In-memory print host
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    blocked: bool,
    log: Arc<Mutex<MemoryLog>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that refuses every open, like a popup blocker
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    /// Every operation seen so far, tagged with the surface name
    pub fn events(&self) -> Vec<(String, SurfaceEvent)> {
        self.log.lock().events.clone()
    }

    /// Number of operations seen so far, refused opens included
    pub fn operation_count(&self) -> usize {
        self.log.lock().events.len()
    }

    /// Documents that were printed, oldest first
    pub fn printed(&self) -> Vec<PrintedDocument> {
        self.log.lock().printed.clone()
    }
}

impl PrintHost for MemoryHost {
    type Surface = MemorySurface;

    fn open(&self, request: &SurfaceRequest) -> Option<MemorySurface> {
        if self.blocked {
            warn!(name = %request.name, "surface open refused");
            self.log.lock().record(&request.name, SurfaceEvent::Refused);
            return None;
        }

        debug!(name = %request.name, features = %request.geometry, "surface opened");
        self.log.lock().record(&request.name, SurfaceEvent::Opened);
        Some(MemorySurface {
            name: request.name.clone(),
            document: String::new(),
            finalized: false,
            log: Arc::clone(&self.log),
        })
    }
}

/// Surface opened by [`MemoryHost`]
#[derive(Debug)]
pub struct MemorySurface {
    name: String,
    document: String,
    finalized: bool,
    log: Arc<Mutex<MemoryLog>>,
}

impl MemorySurface {
    /// Document written so far
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl PrintSurface for MemorySurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, text: &str) -> PrintResult<()> {
        if self.finalized {
            return Err(PrintError::SurfaceState(format!(
                "{}: document stream already closed",
                self.name
            )));
        }
        self.document.push_str(text);
        self.log.lock().record(&self.name, SurfaceEvent::Write(text.len()));
        Ok(())
    }

    fn finalize(&mut self) -> PrintResult<()> {
        self.finalized = true;
        self.log.lock().record(&self.name, SurfaceEvent::Finalized);
        Ok(())
    }

    fn focus(&mut self) -> PrintResult<()> {
        self.log.lock().record(&self.name, SurfaceEvent::Focused);
        Ok(())
    }

    async fn print(&mut self) -> PrintResult<()> {
        if !self.finalized {
            return Err(PrintError::SurfaceState(format!(
                "{}: print before document was finalized",
                self.name
            )));
        }
        let mut log = self.log.lock();
        log.record(&self.name, SurfaceEvent::Printed);
        log.printed.push(PrintedDocument {
            name: self.name.clone(),
            document: self.document.clone(),
        });
        Ok(())
    }

    fn close(self) -> PrintResult<()> {
        self.log.lock().record(&self.name, SurfaceEvent::Closed);
        Ok(())
    }
}
