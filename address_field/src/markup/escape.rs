//! HTML escaping.

/// Escapes text for safe inclusion in HTML content and quoted attributes.
///
/// Handles `&`, `<`, `>`, `"`, and `'`. Single quotes use the numeric
/// `&#039;` form emitted by the host's `esc_html`, so output stays
/// comparable with markup the host produces itself.
///
/// # Examples
///
/// ```
/// use address_field::markup::escape_html;
///
/// assert_eq!(escape_html("Denver"), "Denver");
/// assert_eq!(escape_html(r#"<b class="x">O'Hare & Co</b>"#),
///     "&lt;b class=&quot;x&quot;&gt;O&#039;Hare &amp; Co&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }
    result
}
