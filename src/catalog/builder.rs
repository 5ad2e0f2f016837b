//! Catalog construction: fuses remote components with the local asset index.
//!
//! Components that belong to a fetched component set are grouped under it
//! and become one icon with light/dark variant keys. All other components
//! become standalone icons. Names are joined against local file stems
//! verbatim; the context of an icon comes from its light-theme folder when
//! one matches, otherwise from the remote page name.

use std::collections::HashMap;

use crate::assets::{AssetIndex, Theme};
use crate::catalog::record::{Catalog, IconRecord, VariantKeys, icon_id, search_tags};
use crate::naming::{split_name_and_size, strip_theme_suffix, to_kebab_key};
use crate::remote::{ComponentSetIndex, RemoteComponent, RemoteComponentSet, RemoteData};
use crate::variant::{ThemeRole, classify_variant};

/// Context used when neither a local folder nor a page name is known.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Variant components of one component set, in input order.
struct SetGroup<'a> {
    set: &'a RemoteComponentSet,
    variants: Vec<&'a RemoteComponent>,
}

/// Remote identity an icon record is built from.
struct Origin<'a> {
    key: &'a str,
    node_id: &'a str,
    name: &'a str,
}

/// Build the full catalog. Records are sorted by id; the thumbnail tables
/// hold an entry for every record whose name matches a local file stem.
pub fn build_catalog(remote: &RemoteData, assets: &AssetIndex) -> Catalog {
    let (groups, standalone) = group_components(&remote.components, &remote.sets);
    let mut catalog = Catalog::default();

    for group in &groups {
        let page_names = [
            group.variants.first().and_then(|v| v.containing_frame.page_name()),
            group.set.containing_frame.page_name(),
        ];
        let origin = Origin {
            key: &group.set.key,
            node_id: &group.set.node_id,
            name: &group.set.name,
        };
        add_record(
            &mut catalog,
            assets,
            origin,
            &page_names,
            variant_keys(&group.variants),
        );
    }

    for comp in standalone {
        let origin = Origin {
            key: &comp.key,
            node_id: &comp.node_id,
            name: &comp.name,
        };
        add_record(
            &mut catalog,
            assets,
            origin,
            &[comp.containing_frame.page_name()],
            VariantKeys::default(),
        );
    }

    catalog.icons.sort_by(|a, b| a.id.cmp(&b.id));
    for pair in catalog.icons.windows(2) {
        if pair[0].id == pair[1].id {
            tracing::warn!(
                id = %pair[1].id,
                first = %pair[0].component_name,
                second = %pair[1].component_name,
                "two components map to the same icon id"
            );
        }
    }

    tracing::info!(
        icons = catalog.icons.len(),
        sets = groups.len(),
        thumbnails_light = catalog.thumbnails_light.len(),
        thumbnails_dark = catalog.thumbnails_dark.len(),
        "built icon catalog"
    );
    catalog
}

/// Split components into per-set groups (in order of first appearance) and
/// standalone components.
fn group_components<'a>(
    components: &'a [RemoteComponent],
    sets: &'a ComponentSetIndex,
) -> (Vec<SetGroup<'a>>, Vec<&'a RemoteComponent>) {
    let mut groups: Vec<SetGroup<'a>> = Vec::new();
    let mut group_of: HashMap<&'a str, usize> = HashMap::new();
    let mut standalone = Vec::new();

    for comp in components {
        let set = comp
            .containing_frame
            .set_node_id()
            .and_then(|node_id| sets.get(node_id));
        let Some(set) = set else {
            standalone.push(comp);
            continue;
        };
        let idx = *group_of.entry(set.node_id.as_str()).or_insert_with(|| {
            groups.push(SetGroup {
                set,
                variants: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].variants.push(comp);
    }

    (groups, standalone)
}

/// Assign light/dark roles to a set's variants.
///
/// When no variant classifies and there are exactly two, the first is taken
/// as light and the second as dark. Any other unclassified set gets no role
/// entries, only the raw-name entries.
fn variant_keys(variants: &[&RemoteComponent]) -> VariantKeys {
    let mut keys = VariantKeys::default();
    let mut classified = false;

    for v in variants {
        let role = classify_variant(&v.name);
        if role != ThemeRole::Unknown {
            keys.assign(role, &v.key, &v.node_id);
            classified = true;
        }
        keys.insert_raw(&v.name, &v.key);
    }

    if let (false, [first, second]) = (classified, variants) {
        keys.assign(ThemeRole::Light, &first.key, &first.node_id);
        keys.assign(ThemeRole::Dark, &second.key, &second.node_id);
    }

    keys
}

/// Context folder of the light asset named `name`, or the first known page name.
fn resolve_context(name: &str, assets: &AssetIndex, page_names: &[Option<&str>]) -> String {
    if let Some(asset) = assets.get(Theme::Light, name) {
        return strip_theme_suffix(&asset.context);
    }
    page_names
        .iter()
        .flatten()
        .next()
        .copied()
        .unwrap_or(UNCATEGORIZED)
        .to_string()
}

fn add_record(
    catalog: &mut Catalog,
    assets: &AssetIndex,
    origin: Origin<'_>,
    page_names: &[Option<&str>],
    variant_keys: VariantKeys,
) {
    let split = split_name_and_size(origin.name);
    let size = split.size_or_default();
    let context = resolve_context(origin.name, assets, page_names);

    let context_key = to_kebab_key(&context);
    let icon_key = to_kebab_key(&split.name);
    let id = icon_id(&context_key, &icon_key, size);

    if let Some(asset) = assets.get(Theme::Light, origin.name) {
        catalog
            .thumbnails_light
            .insert(id.clone(), asset.content.clone());
    }
    if let Some(asset) = assets.get(Theme::Dark, origin.name) {
        catalog
            .thumbnails_dark
            .insert(id.clone(), asset.content.clone());
    }

    catalog.icons.push(IconRecord {
        id,
        tags: search_tags(&split.name, &context),
        context: context.clone(),
        context_raw: context,
        context_key,
        icon_name: split.name,
        icon_key,
        size,
        component_key: origin.key.to_string(),
        component_id: origin.node_id.to_string(),
        component_name: origin.name.to_string(),
        variant_keys,
    });
}
