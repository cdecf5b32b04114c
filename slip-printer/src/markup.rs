//! Markup builder
//!
//! Provides a fluent API for building slip and form markup.

use crate::escape::{escape_attr, escape_text};

/// HTML markup builder
///
/// Tracks open elements so `close` always emits the matching end tag.
/// All text and attribute values are escaped.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buf: String,
    open: Vec<&'static str>,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            open: Vec::new(),
        }
    }

    /// Number of elements currently open
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    // === Elements ===

    /// Open an element, with a class attribute unless `class` is empty
    pub fn open(&mut self, tag: &'static str, class: &str) -> &mut Self {
        if class.is_empty() {
            self.open_attrs(tag, &[])
        } else {
            self.open_attrs(tag, &[("class", class)])
        }
    }

    /// Open an element with arbitrary attributes
    pub fn open_attrs(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, &[]);
        self.open.push(tag);
        self
    }

    /// Close the innermost open element
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open.pop() {
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push('>');
        }
        self
    }

    /// Element without content or end tag (`img`, `input`, ...)
    pub fn void(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, &[]);
        self
    }

    /// Void element with boolean attributes (`checked`, `selected`, ...)
    pub fn void_flags(
        &mut self,
        tag: &'static str,
        attrs: &[(&str, &str)],
        flags: &[&str],
    ) -> &mut Self {
        self.start_tag(tag, attrs, flags);
        self
    }

    /// Open an element with boolean attributes
    pub fn open_flags(
        &mut self,
        tag: &'static str,
        attrs: &[(&str, &str)],
        flags: &[&str],
    ) -> &mut Self {
        self.start_tag(tag, attrs, flags);
        self.open.push(tag);
        self
    }

    /// Element with a class and a single text child
    pub fn element(&mut self, tag: &'static str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close()
    }

    // === Content ===

    /// Write escaped text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_text(s));
        self
    }

    /// Write pre-built markup as is
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    // === Layout Helpers ===

    /// Slip checkbox glyph, ticked when `checked`
    pub fn checkbox(&mut self, checked: bool) -> &mut Self {
        let class = if checked { "checkbox checked" } else { "checkbox" };
        self.open("span", class).close()
    }

    /// Dotted fill-in line holding `text`
    pub fn dotted_line(&mut self, text: &str) -> &mut Self {
        self.element("div", "dotted-line", text)
    }

    /// Underlined form field holding `text`
    pub fn form_field(&mut self, text: &str) -> &mut Self {
        self.element("div", "form-field", text)
    }

    /// Small caption under a field
    pub fn caption(&mut self, text: &str) -> &mut Self {
        self.element("div", "postal-label", text)
    }

    /// Empty measurement box (mass / fee)
    pub fn measurement_box(&mut self) -> &mut Self {
        self.open("div", "measurement-box").close()
    }

    // === Output ===

    /// Close everything still open and return the markup
    pub fn build(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.buf
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)], flags: &[&str]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        for flag in flags {
            self.buf.push(' ');
            self.buf.push_str(flag);
        }
        self.buf.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let mut b = MarkupBuilder::new();
        b.open("div", "form-row")
            .element("div", "section-title", "NADAWCA:")
            .form_field("Jan Kowalski")
            .close();

        assert_eq!(
            b.build(),
            concat!(
                r#"<div class="form-row"><div class="section-title">NADAWCA:</div>"#,
                r#"<div class="form-field">Jan Kowalski</div></div>"#,
            )
        );
    }

    #[test]
    fn test_build_closes_open_elements() {
        let mut b = MarkupBuilder::new();
        b.open("div", "a").open("span", "");
        assert_eq!(b.depth(), 2);
        assert_eq!(b.build(), r#"<div class="a"><span></span></div>"#);
    }

    #[test]
    fn test_checkbox_glyph() {
        let mut b = MarkupBuilder::new();
        b.checkbox(true).checkbox(false);
        assert_eq!(
            b.build(),
            r#"<span class="checkbox checked"></span><span class="checkbox"></span>"#
        );
    }

    #[test]
    fn test_text_and_attrs_escaped() {
        let mut b = MarkupBuilder::new();
        b.void_flags("input", &[("value", "\"<x>\"")], &["checked"])
            .dotted_line("a<b");
        assert_eq!(
            b.build(),
            r#"<input value="&quot;&lt;x&gt;&quot;" checked><div class="dotted-line">a&lt;b</div>"#
        );
    }

    #[test]
    fn test_close_on_empty_is_noop() {
        let mut b = MarkupBuilder::new();
        b.close();
        assert_eq!(b.build(), "");
    }
}
