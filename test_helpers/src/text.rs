//! Text normalisation for behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}

/// Trims and unquotes a placeholder captured from a feature file.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Splits a comma-separated placeholder into trimmed, unquoted items.
///
/// An empty placeholder yields no items.
#[must_use]
pub fn list(value: &str) -> Vec<String> {
    let inner = unquote(value);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(normalize_scalar).collect()
}
