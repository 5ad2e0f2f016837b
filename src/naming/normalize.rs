//! Identifier normalization: kebab keys, name/size splitting, and theme
//! suffix stripping.

use std::sync::LazyLock;

use regex::Regex;

use super::tokenize::tokenize;

static RE_NAME_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.+?)(?P<size>[0-9]+)$").unwrap());

static RE_THEME_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[_\-\s]*(dark|light)$").unwrap());

/// A logical icon name with its optional trailing pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndSize {
    pub name: String,
    pub size: Option<u64>,
}

impl NameAndSize {
    /// The size, or 0 when the name carried none.
    pub fn size_or_default(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

/// Convert a display name into a lowercase hyphenated key.
///
/// `"MapView"` becomes `"map-view"`, `"01_Map_GPS"` becomes `"01-map-gps"`.
pub fn to_kebab_key(raw: &str) -> String {
    tokenize(raw)
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a file stem or set name into its logical name and trailing size.
///
/// The trailing digit run is the size; the name is everything before it,
/// trimmed, and is never empty. A digit run too large for `u64` is treated
/// as part of the name.
pub fn split_name_and_size(stem: &str) -> NameAndSize {
    let stem = stem.trim();
    RE_NAME_SIZE
        .captures(stem)
        .and_then(|caps| {
            let size = caps["size"].parse::<u64>().ok()?;
            Some(NameAndSize {
                name: caps["name"].trim().to_string(),
                size: Some(size),
            })
        })
        .unwrap_or_else(|| NameAndSize {
            name: stem.to_string(),
            size: None,
        })
}

/// Remove a trailing `Dark`/`Light` marker (and any `_`, `-`, or whitespace
/// before it) from a context folder name, case-insensitively.
pub fn strip_theme_suffix(context: &str) -> String {
    RE_THEME_SUFFIX.replace(context, "").trim().to_string()
}
