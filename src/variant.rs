//! Variant property parsing and theme classification.
//!
//! Variant components are named as comma-separated `Property=Value` pairs,
//! e.g. `Mode=Dark, Size=16`. Classification looks at the values in
//! declaration order and returns the first theme any of them names.

use std::fmt;

const LIGHT_VALUES: [&str; 3] = ["a", "light", "default"];
// "dart" is a misspelling that occurs in real libraries.
const DARK_VALUES: [&str; 4] = ["b", "dark", "dart", "variant2"];

/// Which visual theme a variant renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// Light theme, role "A".
    Light,
    /// Dark theme, role "B".
    Dark,
    /// No property named a theme.
    Unknown,
}

impl ThemeRole {
    /// The `variant_keys` entry holding the variant's component key.
    pub fn key_field(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("A"),
            Self::Dark => Some("B"),
            Self::Unknown => None,
        }
    }

    /// The `variant_keys` entry holding the variant's node id.
    pub fn id_field(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("A_id"),
            Self::Dark => Some("B_id"),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant properties in declaration order.
///
/// A repeated property keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProps {
    pairs: Vec<(String, String)>,
}

impl VariantProps {
    /// Parse `"Mode=A, Size=16"` into ordered pairs. Parts without `=` are
    /// ignored; each part splits on its first `=`.
    pub fn parse(name: &str) -> Self {
        let mut props = Self::default();
        for part in name.split(',') {
            if let Some((key, value)) = part.trim().split_once('=') {
                props.insert(key.trim(), value.trim());
            }
        }
        props
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Classify by the first property whose value names a theme.
    pub fn classify(&self) -> ThemeRole {
        self.pairs
            .iter()
            .map(|(_, value)| classify_value(value))
            .find(|role| *role != ThemeRole::Unknown)
            .unwrap_or(ThemeRole::Unknown)
    }
}

/// Classify a single property value, case-insensitively.
pub fn classify_value(value: &str) -> ThemeRole {
    let value = value.to_lowercase();
    if LIGHT_VALUES.contains(&value.as_str()) {
        ThemeRole::Light
    } else if DARK_VALUES.contains(&value.as_str()) {
        ThemeRole::Dark
    } else {
        ThemeRole::Unknown
    }
}

/// Parse and classify a variant component name in one step.
pub fn classify_variant(name: &str) -> ThemeRole {
    VariantProps::parse(name).classify()
}
