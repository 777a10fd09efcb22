//! `@`-prefixed schedule shorthands

use std::collections::BTreeMap;

/// Preset name to canonical 5-field expression
pub const PRESETS: &[(&str, &str)] = &[
    ("@yearly", "0 0 1 1 *"),
    ("@annually", "0 0 1 1 *"),
    ("@monthly", "0 0 1 * *"),
    ("@weekly", "0 0 * * 0"),
    ("@daily", "0 0 * * *"),
    ("@midnight", "0 0 * * *"),
    ("@hourly", "0 * * * *"),
];

/// Expand a preset name to its canonical expression
///
/// Lookup is case-insensitive and whole-token only. Anything that is not a
/// known preset is returned unchanged, so it can flow straight into
/// [`crate::parse`].
///
/// ```
/// use a3s_cronexpr::expand_preset;
///
/// assert_eq!(expand_preset("@daily"), "0 0 * * *");
/// assert_eq!(expand_preset("@HOURLY"), "0 * * * *");
/// assert_eq!(expand_preset("*/5 * * * *"), "*/5 * * * *");
/// ```
pub fn expand_preset(token: &str) -> String {
    let trimmed = token.trim();
    PRESETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, expression)| (*expression).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// All presets, keyed by name
pub fn presets() -> BTreeMap<&'static str, &'static str> {
    PRESETS.iter().copied().collect()
}
