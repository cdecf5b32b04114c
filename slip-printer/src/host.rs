//! Print surface capability
//!
//! A host opens surfaces; a surface accepts a document, can be focused,
//! printed and closed. Adapters:
//! - [`MemoryHost`](crate::MemoryHost): headless, keeps printed documents
//! - [`FileHost`](crate::FileHost): one HTML file per surface, optional spooler command

use std::fmt;

use crate::error::PrintResult;

/// Position and size of a print preview surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            left: 200,
            top: 200,
            width: 800,
            height: 600,
        }
    }
}

impl fmt::Display for SurfaceGeometry {
    /// Window feature string, e.g. `left=200,top=200,width=800,height=600`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={},top={},width={},height={}",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Parameters for opening a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceRequest {
    pub url: String,
    pub name: String,
    pub geometry: SurfaceGeometry,
}

impl SurfaceRequest {
    /// Blank print preview surface with the default geometry
    pub fn print_preview(name: impl Into<String>) -> Self {
        Self {
            url: "about:blank".to_string(),
            name: name.into(),
            geometry: SurfaceGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: SurfaceGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// Trait for print hosts
pub trait PrintHost {
    type Surface: PrintSurface;

    /// Open a new blank surface; `None` when the host refuses
    fn open(&self, request: &SurfaceRequest) -> Option<Self::Surface>;
}

/// Trait for an opened print surface
#[allow(async_fn_in_trait)]
pub trait PrintSurface {
    /// Name the surface was opened with
    fn name(&self) -> &str;

    /// Append text to the surface's document stream
    fn write(&mut self, text: &str) -> PrintResult<()>;

    /// Close the document stream so the surface can render it
    fn finalize(&mut self) -> PrintResult<()>;

    /// Bring the surface to the front
    fn focus(&mut self) -> PrintResult<()>;

    /// Issue the print command
    async fn print(&mut self) -> PrintResult<()>;

    /// Close the surface
    fn close(self) -> PrintResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_features() {
        assert_eq!(
            SurfaceGeometry::default().to_string(),
            "left=200,top=200,width=800,height=600"
        );
    }

    #[test]
    fn test_print_preview_request() {
        let req = SurfaceRequest::print_preview("Print1700000000000");
        assert_eq!(req.url, "about:blank");
        assert_eq!(req.name, "Print1700000000000");

        let req = req.with_geometry(SurfaceGeometry {
            width: 1024,
            ..Default::default()
        });
        assert_eq!(req.geometry.width, 1024);
        assert_eq!(req.geometry.height, 600);
    }
}
