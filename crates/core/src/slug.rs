//! Slug derivation from display names.

use std::sync::LazyLock;

use regex::Regex;

// U+FEFF counts as whitespace alongside Unicode `White_Space`.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\\s\u{FEFF}]+").unwrap());

/// Derive the URL identifier for a display name.
///
/// Every maximal run of whitespace becomes a single `-`, then the whole
/// string is lowercased. Leading and trailing runs are not trimmed.
///
/// Not injective: `"Foo Bar"` and `"foo-bar"` both map to `"foo-bar"`.
/// Such collisions are caught by the storage layer's unique index on `slug`.
///
/// - "Boston University" -> "boston-university"
/// - "MIT   Sloan" -> "mit-sloan"
#[must_use]
pub fn derive_slug(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "-").to_lowercase()
}
