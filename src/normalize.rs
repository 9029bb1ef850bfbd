//! Page text cleanup and blank page filtering.

use crate::config::EmptyCheck;

/// Encoding artifact that some PDFs leak into extracted text.
const NULL_CHAR: char = '\u{0}';

/// Clean one page of raw text, or return `None` if the page should be dropped.
///
/// Blank pages are dropped because empty blocks break downstream consumers
/// such as embedders. Null characters are removed; every other character,
/// whitespace and non-ASCII text included, is left untouched.
///
/// With [`EmptyCheck::Raw`] only exactly-empty raw text is dropped, so a
/// page made solely of null characters comes back as `Some("")`.
///
/// # Example
///
/// ```
/// use pdf_blockifier::{normalize_page_text, EmptyCheck};
///
/// assert_eq!(normalize_page_text("a\u{0}b", EmptyCheck::Normalized).as_deref(), Some("ab"));
/// assert_eq!(normalize_page_text("", EmptyCheck::Normalized), None);
/// assert_eq!(normalize_page_text("\u{0}", EmptyCheck::Normalized), None);
/// assert_eq!(normalize_page_text("\u{0}", EmptyCheck::Raw).as_deref(), Some(""));
/// ```
pub fn normalize_page_text(raw: &str, check: EmptyCheck) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let cleaned = strip_nulls(raw);

    if cleaned.is_empty() && check == EmptyCheck::Normalized {
        return None;
    }
    Some(cleaned)
}

/// Remove every null character.
pub fn strip_nulls(text: &str) -> String {
    if text.contains(NULL_CHAR) {
        text.replace(NULL_CHAR, "")
    } else {
        text.to_string()
    }
}

/// Count null characters in `text`.
pub fn null_count(text: &str) -> usize {
    text.chars().filter(|&c| c == NULL_CHAR).count()
}
