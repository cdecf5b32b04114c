//! Rendered document
//!
//! Stands in for the host page: each mount point holds the inner markup of
//! the view rendered into it.

use std::collections::BTreeMap;

/// Mount point of the editable form
pub const FORM_ROOT: &str = "postal-form";
/// Mount point of the hidden printable slip
pub const PRINTABLE_ROOT: &str = "printable-form";

#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
    elements: BTreeMap<String, String>,
}

impl RenderedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content mounted at `id`
    pub fn mount(&mut self, id: &str, markup: String) {
        self.elements.insert(id.to_string(), markup);
    }

    /// Remove the element; returns its last content
    pub fn unmount(&mut self, id: &str) -> Option<String> {
        self.elements.remove(id)
    }

    pub fn element_inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Full page with every mount point, stylesheet first
    pub fn to_html(&self, stylesheet: &str) -> String {
        let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        html.push_str("<style>");
        html.push_str(stylesheet);
        html.push_str("</style></head><body>");
        for (id, inner) in &self.elements {
            html.push_str(&format!("<div id=\"{id}\">{inner}</div>"));
        }
        html.push_str("</body></html>");
        html
    }
}
