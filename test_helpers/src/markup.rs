//! Inspection helpers for rendered markup.
//!
//! Renderers emit compact HTML without whitespace between elements, so plain
//! substring searches are enough for assertions.

/// Counts non-overlapping occurrences of `needle`.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Returns the text between the first `start` and the following `end`.
///
/// ```rust
/// use address_field_test_helpers::markup::between;
///
/// let html = r#"<ul class="row missing"><li>Country</li></ul>"#;
/// assert_eq!(between(html, r#"<ul class="row missing">"#, "</ul>"), Some("<li>Country</li>"));
/// ```
#[must_use]
pub fn between<'a>(haystack: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let (_, rest) = haystack.split_once(start)?;
    rest.split_once(end).map(|(inner, _)| inner)
}

/// Collects every value of `attribute` in document order.
///
/// Values are returned still escaped, exactly as written.
#[must_use]
pub fn attribute_values(haystack: &str, attribute: &str) -> Vec<String> {
    let marker = format!(" {attribute}=\"");
    haystack
        .split(marker.as_str())
        .skip(1)
        .filter_map(|tail| tail.split_once('"').map(|(value, _)| value.to_owned()))
        .collect()
}
