//! Output records: icons, their variant keys, and thumbnail tables.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::naming::tokenize;
use crate::variant::ThemeRole;

/// Icon id to trimmed SVG text, for one theme.
pub type ThumbnailTable = BTreeMap<String, String>;

/// Build the composite id `icon/<context>/<name>/<size>`.
pub fn icon_id(context_key: &str, icon_key: &str, size: u64) -> String {
    format!("icon/{context_key}/{icon_key}/{size}")
}

/// Search tags: lowercase words longer than one character from the icon
/// name and its context, sorted and deduplicated.
pub fn search_tags(icon_name: &str, context: &str) -> Vec<String> {
    tokenize(icon_name)
        .into_iter()
        .chain(tokenize(context))
        .filter(|t| t.chars().count() > 1)
        .map(|t| t.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Variant component keys of an icon.
///
/// Holds the role entries `A`/`A_id` (light) and `B`/`B_id` (dark) when a
/// role could be assigned, plus one entry per variant mapping its raw name
/// to its component key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKeys(BTreeMap<String, String>);

impl VariantKeys {
    /// Record `key` and `node_id` under `role`'s entries. Unknown roles are ignored.
    pub fn assign(&mut self, role: ThemeRole, key: &str, node_id: &str) {
        if let (Some(key_field), Some(id_field)) = (role.key_field(), role.id_field()) {
            self.0.insert(key_field.to_string(), key.to_string());
            self.0.insert(id_field.to_string(), node_id.to_string());
        }
    }

    /// Map a variant's raw name to its component key.
    pub fn insert_raw(&mut self, name: &str, key: &str) {
        self.0.insert(name.to_string(), key.to_string());
    }

    /// Component key assigned to `role`, if any.
    pub fn role_key(&self, role: ThemeRole) -> Option<&str> {
        role.key_field()
            .and_then(|field| self.0.get(field))
            .map(String::as_str)
    }

    /// Node id assigned to `role`, if any.
    pub fn role_node_id(&self, role: ThemeRole) -> Option<&str> {
        role.id_field()
            .and_then(|field| self.0.get(field))
            .map(String::as_str)
    }

    pub fn get(&self, entry: &str) -> Option<&str> {
        self.0.get(entry).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// `icon/<context_key>/<icon_key>/<size>`.
    pub id: String,
    pub context: String,
    pub context_raw: String,
    pub context_key: String,
    pub icon_name: String,
    pub icon_key: String,
    /// Pixel size, 0 when the name carries none.
    pub size: u64,
    /// Key of the component set, or of the component for standalone icons.
    pub component_key: String,
    pub component_id: String,
    pub component_name: String,
    pub variant_keys: VariantKeys,
    pub tags: Vec<String>,
}

/// The reconciled catalog and both thumbnail tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Sorted by id.
    pub icons: Vec<IconRecord>,
    pub thumbnails_light: ThumbnailTable,
    pub thumbnails_dark: ThumbnailTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_format() {
        assert_eq!(icon_id("navigation", "compass", 32), "icon/navigation/compass/32");
        assert_eq!(icon_id("map-view", "pan", 0), "icon/map-view/pan/0");
    }

    #[test]
    fn tags_merge_name_and_context() {
        let tags = search_tags("ZoomToGPS", "01_MapView");
        assert_eq!(tags, ["01", "gps", "map", "to", "view", "zoom"]);
    }

    #[test]
    fn tags_drop_single_chars_and_duplicates() {
        let tags = search_tags("MapA", "Map");
        assert_eq!(tags, ["map"]);
    }

    #[test]
    fn variant_keys_roles_and_raw_names() {
        let mut keys = VariantKeys::default();
        keys.assign(ThemeRole::Light, "k-light", "1:1");
        keys.assign(ThemeRole::Unknown, "ignored", "0:0");
        keys.insert_raw("Mode=Light", "k-light");

        assert_eq!(keys.role_key(ThemeRole::Light), Some("k-light"));
        assert_eq!(keys.role_node_id(ThemeRole::Light), Some("1:1"));
        assert_eq!(keys.role_key(ThemeRole::Dark), None);
        assert_eq!(keys.get("Mode=Light"), Some("k-light"));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn variant_keys_serialize_flat() {
        let mut keys = VariantKeys::default();
        keys.assign(ThemeRole::Dark, "kb", "2:2");
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"{"B":"kb","B_id":"2:2"}"#);
    }
}
