#![forbid(unsafe_code)]

//! HTML output buffer.
//!
//! Views write markup through a [`Frame`]. Text and attribute values are
//! always escaped; only [`Frame::raw`] writes verbatim, and it is reserved
//! for trusted static fragments such as inline SVG icons.

use std::fmt::Write as _;

fn escape_into(buf: &mut String, value: &str) {
    let _ = write!(buf, "{}", v_htmlescape::escape(value));
}

/// Markup accumulated during one `view()` pass.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write trusted markup verbatim.
    pub fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    /// Write escaped text.
    pub fn text(&mut self, text: &str) {
        escape_into(&mut self.buf, text);
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            escape_into(&mut self.buf, value);
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    /// Open an element.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
    }

    /// Write a void element such as `<img>` or `<input>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
    }

    pub fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// Element with escaped text content.
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.open(tag, attrs);
        self.text(text);
        self.close(tag);
    }

    /// Element whose children are written by `body`.
    pub fn with(&mut self, tag: &str, attrs: &[(&str, &str)], body: impl FnOnce(&mut Self)) {
        self.open(tag, attrs);
        body(self);
        self.close(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut frame = Frame::new();
        frame.element("a", &[("href", "?q=\"x\"&y")], "<b>Tom & Jerry");
        assert_eq!(
            frame.as_str(),
            "<a href=\"?q=&quot;x&quot;&amp;y\">&lt;b&gt;Tom &amp; Jerry</a>"
        );
    }

    #[test]
    fn nested_elements() {
        let mut frame = Frame::new();
        frame.with("ul", &[("class", "tags")], |f| {
            f.element("li", &[], "Rust");
            f.void("img", &[("src", "a.png"), ("alt", "")]);
        });
        assert_eq!(
            frame.as_str(),
            "<ul class=\"tags\"><li>Rust</li><img src=\"a.png\" alt=\"\"></ul>"
        );
    }
}
