//! End-to-end tests for the icon catalog pipeline.
//!
//! These tests build real theme directory trees under a temp dir, serve
//! remote data from an in-memory source, and check the reconciled catalog
//! and thumbnail tables.

use std::path::Path;

use icon_catalog::config::CatalogConfig;
use icon_catalog::pipeline;
use icon_catalog::remote::{
    ComponentSetRef, ContainingFrame, RemoteComponent, RemoteComponentSet, StaticSource,
};
use icon_catalog::variant::ThemeRole;

fn write_svg(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn variant(key: &str, node_id: &str, name: &str, set_node_id: &str) -> RemoteComponent {
    RemoteComponent {
        key: key.into(),
        node_id: node_id.into(),
        name: name.into(),
        containing_frame: ContainingFrame {
            node_id: format!("frame-{set_node_id}"),
            page_name: "Library".into(),
            containing_component_set: Some(ComponentSetRef {
                node_id: set_node_id.into(),
            }),
            ..Default::default()
        },
    }
}

fn standalone(key: &str, node_id: &str, name: &str, page: &str) -> RemoteComponent {
    RemoteComponent {
        key: key.into(),
        node_id: node_id.into(),
        name: name.into(),
        containing_frame: ContainingFrame {
            page_name: page.into(),
            ..Default::default()
        },
    }
}

fn component_set(key: &str, node_id: &str, name: &str) -> RemoteComponentSet {
    RemoteComponentSet {
        key: key.into(),
        node_id: node_id.into(),
        name: name.into(),
        ..Default::default()
    }
}

fn config_for(root: &Path) -> CatalogConfig {
    CatalogConfig {
        file_key: "test-file".into(),
        input_dir: root.join("input"),
        light_dir: "Light".into(),
        dark_dir: "Dark".into(),
        output_dir: root.join("out"),
        ..Default::default()
    }
}

/// A small library: one classified set, one positional set, one three-way
/// set, and two standalone components.
fn library() -> StaticSource {
    StaticSource {
        components: vec![
            variant("compass-a", "10:1", "Mode=Light", "10:0"),
            variant("compass-b", "10:2", "Mode=Dark", "10:0"),
            variant("pan-1", "20:1", "Property 1=Default", "20:0"),
            variant("pan-2", "20:2", "Property 1=Variant2", "20:0"),
            variant("zoom-1", "30:1", "Style=One", "30:0"),
            variant("zoom-2", "30:2", "Style=Two", "30:0"),
            variant("zoom-3", "30:3", "Style=Three", "30:0"),
            standalone("gps-key", "40:1", "GPSIcon16", "Sensors"),
            standalone("loose-key", "50:1", "Loose", ""),
        ],
        component_sets: vec![
            component_set("compass-set", "10:0", "Compass32"),
            component_set("pan-set", "20:0", "Pan16"),
            component_set("zoom-set", "30:0", "ZoomIn16"),
        ],
    }
}

#[test]
fn end_to_end_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input");
    write_svg(&input, "Light/Navigation/Compass32.svg", "<svg>compass</svg>\n");
    write_svg(&input, "Light/01_MapView_A/tools/Pan16.svg", "<svg>pan</svg>");
    write_svg(&input, "Dark/01_MapView_A_Dark/Pan16.svg", "<svg>pan dark</svg>");
    write_svg(&input, "Dark/Sensors_Dark/GPSIcon16.svg", "<svg>gps dark</svg>");

    let config = config_for(dir.path());
    let output = pipeline::run(&config, &library(), |_| {}).unwrap();
    let catalog = &output.catalog;

    let ids: Vec<_> = catalog.icons.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "icon//loose/0",
            "icon/01-map-view-a/pan/16",
            "icon/library/zoom-in/16",
            "icon/navigation/compass/32",
            "icon/sensors/gps-icon/16",
        ]
    );

    // Component set with a light asset and no dark asset.
    let compass = &catalog.icons[3];
    assert_eq!(compass.context, "Navigation");
    assert_eq!(compass.component_key, "compass-set");
    assert_eq!(compass.variant_keys.role_key(ThemeRole::Light), Some("compass-a"));
    assert_eq!(compass.variant_keys.role_key(ThemeRole::Dark), Some("compass-b"));
    assert_eq!(
        catalog.thumbnails_light.get(&compass.id).map(String::as_str),
        Some("<svg>compass</svg>")
    );
    assert!(!catalog.thumbnails_dark.contains_key(&compass.id));

    // Classified via "default" / "variant2".
    let pan = &catalog.icons[1];
    assert_eq!(pan.variant_keys.role_key(ThemeRole::Light), Some("pan-1"));
    assert_eq!(pan.variant_keys.role_node_id(ThemeRole::Dark), Some("20:2"));
    assert_eq!(catalog.thumbnails_dark[&pan.id], "<svg>pan dark</svg>");

    // Three unclassified variants: raw names only.
    let zoom = &catalog.icons[2];
    assert_eq!(zoom.context, "Library");
    assert_eq!(zoom.variant_keys.role_key(ThemeRole::Light), None);
    assert_eq!(zoom.variant_keys.role_key(ThemeRole::Dark), None);
    assert_eq!(zoom.variant_keys.len(), 3);
    assert_eq!(zoom.tags, ["in", "library", "zoom"]);

    // Standalone: page name context, dark thumbnail by stem.
    let gps = &catalog.icons[4];
    assert_eq!(gps.context, "Sensors");
    assert!(gps.variant_keys.is_empty());
    assert_eq!(gps.tags, ["gps", "icon", "sensors"]);
    assert_eq!(catalog.thumbnails_dark[&gps.id], "<svg>gps dark</svg>");

    let loose = &catalog.icons[0];
    assert_eq!(loose.context, "uncategorized");
    assert_eq!(loose.size, 0);

    let summary = &output.summary;
    assert_eq!(summary.icons, 5);
    assert_eq!(summary.light_matches, 2);
    assert_eq!(summary.dark_matches, 2);
    assert_eq!(summary.with_dark_variant, 2);
    assert_eq!(summary.unmatched_total, 3);
    assert_eq!(summary.unmatched_sample, ["Loose", "ZoomIn16", "GPSIcon16"]);
}

#[test]
fn ids_are_well_formed_and_unique() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_for(dir.path());
    let output = pipeline::run(&config, &library(), |_| {}).unwrap();

    let is_key = |s: &str| {
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    };
    let mut seen = std::collections::HashSet::new();
    for icon in &output.catalog.icons {
        let parts: Vec<_> = icon.id.split('/').collect();
        assert_eq!(parts.len(), 4, "{}", icon.id);
        assert_eq!(parts[0], "icon");
        assert!(is_key(parts[1]) && is_key(parts[2]), "{}", icon.id);
        assert_eq!(parts[3].parse::<u64>().unwrap(), icon.size);
        assert!(seen.insert(icon.id.clone()), "duplicate id {}", icon.id);
    }
}

#[test]
fn missing_theme_directories_are_not_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_for(dir.path());
    let output = pipeline::run(&config, &library(), |_| {}).unwrap();

    assert_eq!(output.catalog.icons.len(), 5);
    assert!(output.catalog.thumbnails_light.is_empty());
    assert!(output.catalog.thumbnails_dark.is_empty());
    assert_eq!(output.summary.unmatched_total, 5);
    assert!(output.artifacts.thumbnails_dark.exists());
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::TempDir::new().unwrap();
    write_svg(
        &dir.path().join("svgs"),
        "Day/Navigation/Compass32.svg",
        "<svg/>",
    );
    let config_path = dir.path().join("catalog.toml");
    std::fs::write(
        &config_path,
        format!(
            "file_key = \"abc\"\ninput_dir = {:?}\nlight_dir = \"Day\"\noutput_dir = {:?}\n",
            dir.path().join("svgs").display().to_string(),
            dir.path().join("out").display().to_string(),
        ),
    )
    .unwrap();

    let config = CatalogConfig::load(&config_path).unwrap();
    let output = pipeline::run(&config, &library(), |_| {}).unwrap();
    assert_eq!(output.summary.light_matches, 1);
    assert!(dir.path().join("out/icons.json").exists());
}
