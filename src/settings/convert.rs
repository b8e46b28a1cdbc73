//! String-to-value conversions for deployment settings.

const TRUTHY: &[&str] = &["true", "yes", "on", "y", "t", "1"];
const FALSY: &[&str] = &["false", "no", "off", "n", "f", "0"];

/// Interpret a settings string as a boolean.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Returns `None` when the value is not a recognized boolean form.
pub fn as_bool(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSY.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Split a list-valued setting on commas and whitespace, dropping empty items.
pub fn as_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
