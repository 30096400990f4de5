//! Boundary normalization for raw form text.
//!
//! Forms hand the engine untrimmed text. Everything that enters a card or
//! column goes through here first so that whitespace-only input becomes
//! `None` instead of an empty string.

/// Trim `raw`, returning `None` when nothing is left.
pub fn trimmed(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim an optional field, collapsing absent and blank to `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.and_then(trimmed)
}

/// Split delimited text into trimmed, non-empty parts.
///
/// Order and duplicates are preserved. Returns `None` when no part survives.
///
/// ```
/// use kanban_engine::normalize::split_delimited;
///
/// assert_eq!(
///     split_delimited("a, b, ,c", ','),
///     Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
/// );
/// assert_eq!(split_delimited(" , ", ','), None);
/// ```
pub fn split_delimited(raw: &str, delimiter: char) -> Option<Vec<String>> {
    non_empty_parts(raw.split(delimiter))
}

/// Trim every entry of an explicit list, dropping the blank ones.
pub fn clean_list<I, S>(items: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    non_empty_parts(items)
}

fn non_empty_parts<I, S>(parts: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = parts
        .into_iter()
        .filter_map(|p| trimmed(p.as_ref()))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}
