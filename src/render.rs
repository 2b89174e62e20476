//! HTML output writer.
//!
//! A thin string builder shared by the expansion passes and the
//! collaborators that run after them.

use crate::escape;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use slackdown::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.write_str("@");
/// writer.write_escaped_text("<b>someone</b>");
///
/// assert_eq!(writer.into_string(), "@&lt;b&gt;someone&lt;/b&gt;");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(256),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Expanded markup is typically a little longer than its input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write a double-quoted attribute value with escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, value: &str) {
        html_escape::encode_double_quoted_attribute_to_string(value, &mut self.out);
    }

    /// Write text, rendering each `\n` as `<br>`.
    pub fn write_with_line_breaks(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.out.push_str(first);
        }
        for line in lines {
            self.out.push_str("<br>");
            self.out.push_str(line);
        }
    }

    /// `<a>` opening a new tab. `href` and `label` are written verbatim:
    /// Slack has already entity-escaped message text.
    pub fn anchor(&mut self, scheme: &str, href: &str, label: &str) {
        self.out.push_str("<a href=\"");
        self.out.push_str(scheme);
        self.out.push_str(href);
        self.out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
        self.out.push_str(label);
        self.out.push_str("</a>");
    }

    /// Custom emoji image.
    pub fn emoji_image(&mut self, name: &str, src: &str) {
        self.out.push_str("<img alt=\"");
        self.write_escaped_attr(name);
        self.out.push_str("\" src=\"");
        self.write_escaped_attr(src);
        self.out.push_str("\" class=\"slack_emoji\" />");
    }

    /// One `&#xCODE` reference per code point, without a trailing `;`.
    pub fn code_point_refs<'a>(&mut self, codes: impl IntoIterator<Item = &'a str>) {
        for code in codes {
            self.out.push_str("&#x");
            self.out.push_str(code);
        }
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Get mutable access to the underlying buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    /// Take the finished output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}
