// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cuisine tag helpers.
//!
//! OSM stores cuisines as `cuisine=italian;pizza`. The translation layer
//! looks each one up as `cuisine_<key>`.

use crate::config::{CUISINE_SEPARATOR, CUISINE_TRANSLATION_PREFIX};

/// `italian` -> `cuisine_italian`
pub fn cuisine_to_display_key(raw: &str) -> String {
    let mut key = String::with_capacity(CUISINE_TRANSLATION_PREFIX.len() + raw.len());
    key.push_str(CUISINE_TRANSLATION_PREFIX);
    key.push_str(raw);
    key
}

/// `cuisine_italian` -> `italian`
///
/// Strips every occurrence of the prefix, not only the leading one:
/// `cuisine_foo_cuisine_bar` becomes `foo_bar`.
pub fn display_key_to_cuisine(display_key: &str) -> String {
    display_key.replace(CUISINE_TRANSLATION_PREFIX, "")
}

pub fn is_cuisine_display_key(s: &str) -> bool {
    s.starts_with(CUISINE_TRANSLATION_PREFIX)
}

/// Makes a human-entered cuisine usable as a translation key:
/// `", "` and `' '` become `'_'`, then the result is lowercased.
pub fn normalize_cuisine(raw: &str) -> String {
    // ", " first, otherwise it would turn into ",_".
    raw.replace(", ", "_").replace(' ', "_").to_lowercase()
}

/// Splits an OSM cuisine tag. Empty segments are kept.
pub fn split_cuisines(s: &str) -> Vec<String> {
    s.split(CUISINE_SEPARATOR).map(str::to_string).collect()
}

/// Inverse of [`split_cuisines`].
pub fn join_cuisines<S: AsRef<str>>(parts: &[S]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(CUISINE_SEPARATOR);
        }
        joined.push_str(part.as_ref());
    }
    joined
}
