//! Wire types for the design-tool REST API.
//!
//! Only the fields the catalog needs are modeled; everything is optional on
//! the wire and defaults to empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reference from a frame to the component set that contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentSetRef {
    pub node_id: String,
}

/// Where a component or component set lives in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainingFrame {
    pub node_id: String,
    pub page_name: String,
    pub containing_component_set: Option<ComponentSetRef>,
}

impl ContainingFrame {
    /// Node id of the component set this frame belongs to.
    ///
    /// The declared set reference wins; the frame's own node id is used only
    /// when no set is referenced at all.
    pub fn set_node_id(&self) -> Option<&str> {
        self.containing_component_set
            .as_ref()
            .map(|set| set.node_id.as_str())
            .filter(|id| !id.is_empty())
            .or_else(|| Some(self.node_id.as_str()).filter(|id| !id.is_empty()))
    }

    pub fn page_name(&self) -> Option<&str> {
        Some(self.page_name.as_str()).filter(|p| !p.is_empty())
    }
}

/// A single published component: one visual variant, or a standalone icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteComponent {
    pub key: String,
    pub node_id: String,
    pub name: String,
    pub containing_frame: ContainingFrame,
}

/// A published component set: one logical icon grouping its theme variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteComponentSet {
    pub key: String,
    pub node_id: String,
    pub name: String,
    pub containing_frame: ContainingFrame,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ComponentsResponse {
    pub meta: ComponentsMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ComponentsMeta {
    pub components: Vec<RemoteComponent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ComponentSetsResponse {
    pub meta: ComponentSetsMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ComponentSetsMeta {
    pub component_sets: Vec<RemoteComponentSet>,
}

/// Component sets keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct ComponentSetIndex {
    by_node_id: HashMap<String, RemoteComponentSet>,
}

impl ComponentSetIndex {
    pub fn new(sets: Vec<RemoteComponentSet>) -> Self {
        let by_node_id = sets
            .into_iter()
            .map(|set| (set.node_id.clone(), set))
            .collect();
        Self { by_node_id }
    }

    pub fn get(&self, node_id: &str) -> Option<&RemoteComponentSet> {
        self.by_node_id.get(node_id)
    }

    pub fn len(&self) -> usize {
        self.by_node_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_components_response() {
        let json = r#"{
            "status": 200,
            "meta": {
                "components": [{
                    "key": "k1",
                    "node_id": "1:2",
                    "name": "Mode=Dark",
                    "containing_frame": {
                        "nodeId": "1:1",
                        "name": "Compass32",
                        "pageName": "Navigation",
                        "containingComponentSet": { "nodeId": "1:0", "name": "Compass32" }
                    }
                }]
            }
        }"#;
        let resp: ComponentsResponse = serde_json::from_str(json).unwrap();
        let comp = &resp.meta.components[0];
        assert_eq!(comp.key, "k1");
        assert_eq!(comp.containing_frame.page_name(), Some("Navigation"));
        assert_eq!(comp.containing_frame.set_node_id(), Some("1:0"));
    }

    #[test]
    fn missing_fields_default() {
        let resp: ComponentSetsResponse = serde_json::from_str(r#"{"meta":{}}"#).unwrap();
        assert!(resp.meta.component_sets.is_empty());

        let comp: RemoteComponent = serde_json::from_str(r#"{"name":"Loose"}"#).unwrap();
        assert_eq!(comp.containing_frame.page_name(), None);
        assert_eq!(comp.containing_frame.set_node_id(), None);
    }

    #[test]
    fn frame_node_id_is_fallback_only() {
        let frame = ContainingFrame {
            node_id: "9:9".into(),
            ..Default::default()
        };
        assert_eq!(frame.set_node_id(), Some("9:9"));

        let frame = ContainingFrame {
            node_id: "9:9".into(),
            containing_component_set: Some(ComponentSetRef {
                node_id: "5:5".into(),
            }),
            ..Default::default()
        };
        assert_eq!(frame.set_node_id(), Some("5:5"));
    }

    #[test]
    fn set_index_lookup() {
        let index = ComponentSetIndex::new(vec![RemoteComponentSet {
            key: "set-key".into(),
            node_id: "1:0".into(),
            name: "Compass32".into(),
            ..Default::default()
        }]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1:0").unwrap().name, "Compass32");
        assert!(index.get("2:0").is_none());
    }
}
