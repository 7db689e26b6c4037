//! Compact HTML writer.

use super::escape_html;

/// A single `name="value"` pair. Values are escaped when written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name, written verbatim.
    pub name: &'a str,
    /// Attribute value, escaped on output.
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    /// Builds an attribute.
    #[must_use]
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    /// Builds an attribute only when `value` is non-empty.
    #[must_use]
    pub fn non_empty(name: &'a str, value: &'a str) -> Option<Self> {
        (!value.is_empty()).then_some(Self { name, value })
    }
}

/// Accumulates markup without inserting whitespace between elements.
///
/// ```rust
/// use address_field::markup::{Attribute, MarkupWriter};
///
/// let mut writer = MarkupWriter::new();
/// writer.open("span", &[Attribute::new("class", "city")]);
/// writer.text("Fort Collins & Loveland");
/// writer.close("span");
/// assert_eq!(writer.finish(), r#"<span class="city">Fort Collins &amp; Loveland</span>"#);
/// ```
#[derive(Debug, Default)]
pub struct MarkupWriter {
    buffer: String,
}

impl MarkupWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Writes an opening tag.
    pub fn open(&mut self, tag: &str, attributes: &[Attribute<'_>]) {
        self.start_tag(tag, attributes);
        self.buffer.push('>');
    }

    /// Writes a self-closing tag such as `<input ... />`.
    pub fn void(&mut self, tag: &str, attributes: &[Attribute<'_>]) {
        self.start_tag(tag, attributes);
        self.buffer.push_str(" />");
    }

    /// Writes a closing tag.
    pub fn close(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// Writes an element holding only escaped text.
    pub fn element(&mut self, tag: &str, attributes: &[Attribute<'_>], text: &str) {
        self.open(tag, attributes);
        self.text(text);
        self.close(tag);
    }

    /// Writes escaped text.
    pub fn text(&mut self, text: &str) {
        self.buffer.push_str(&escape_html(text));
    }

    /// Writes `markup` unchanged. Callers are responsible for its safety.
    pub fn raw(&mut self, markup: &str) {
        self.buffer.push_str(markup);
    }

    /// Returns the accumulated markup.
    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }

    fn start_tag(&mut self, tag: &str, attributes: &[Attribute<'_>]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for attribute in attributes {
            self.buffer.push(' ');
            self.buffer.push_str(attribute.name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_html(attribute.value));
            self.buffer.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn void_elements_self_close() {
        let mut writer = MarkupWriter::new();
        let attributes = [Attribute::new("type", "text"), Attribute::new("value", "<")];
        writer.void("input", &attributes);
        assert_eq!(writer.finish(), r#"<input type="text" value="&lt;" />"#);
    }

    #[rstest]
    fn open_without_attributes_has_no_padding() {
        let mut writer = MarkupWriter::new();
        writer.element("td", &[], "a<b");
        assert_eq!(writer.finish(), "<td>a&lt;b</td>");
    }

    #[rstest]
    #[case("", None)]
    #[case("city", Some(Attribute::new("class", "city")))]
    fn non_empty_attributes_skip_blank_values(
        #[case] value: &str,
        #[case] expected: Option<Attribute<'static>>,
    ) {
        assert_eq!(Attribute::non_empty("class", value), expected);
    }

    #[rstest]
    fn raw_markup_is_not_escaped() {
        let mut writer = MarkupWriter::new();
        writer.raw("<b>&amp;</b>");
        assert_eq!(writer.finish(), "<b>&amp;</b>");
    }
}
