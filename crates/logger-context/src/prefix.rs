//! Dotted name prefixes

/// Separator between name segments
pub const SEPARATOR: char = '.';

/// Normalize a prefix fragment: drop one leading and one trailing separator,
/// then append a single separator. Empty input yields an empty prefix.
pub(crate) fn normalize(fragment: &str) -> String {
    let trimmed = fragment.strip_prefix(SEPARATOR).unwrap_or(fragment);
    let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);

    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}{SEPARATOR}")
    }
}
