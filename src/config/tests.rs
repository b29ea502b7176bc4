//! Tests for the config module

use super::loader::{apply_overrides, discover};
use super::types::*;
use crate::domain::policies::ActivationPolicy;
use crate::domain::value_objects::{FitPadding, GeometryKind, LayerCategory};
use crate::error::GeostageError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.map.center, [52.1205, 11.6276]);
    assert_eq!(config.map.zoom, 13);
    assert_eq!(config.map.fit_padding, 50);
    assert_eq!(config.activation.policy, ActivationPolicy::AttachAll);
    assert!(config.data.base_url.is_none());
    assert!(config.layers.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[map]
center = [52.13, 11.64]
zoom = 15
fit_padding = 20

[activation]
policy = "anchor_only"

[data]
base_url = "https://example.org/data"

[logging]
level = "debug"

[[layers]]
name = "Dom - Anker"
location = "Dom"
category = "anker"
geometry = "polygon"
path = "dom/anker.geojson"

[[layers]]
name = "Dom - Routen"
location = "Dom"
category = "narrative"
path = "dom/routen.geojson"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.map.zoom, 15);
    assert_eq!(config.map.center().lat, 52.13);
    assert_eq!(config.activation.policy, ActivationPolicy::AnchorOnly);
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
    assert_eq!(config.data.origin(), "https://example.org/data");
    assert_eq!(config.layers.len(), 2);
    assert_eq!(config.layers[0].category, LayerCategory::Anchor);
    assert_eq!(config.layers[0].geometry, Some(GeometryKind::Polygon));
    assert_eq!(config.layers[1].geometry, None);
}

#[test]
fn test_engine_options_follow_config() {
    let mut config = Config::default();
    config.map.fit_padding = 10;
    config.activation.policy = ActivationPolicy::AnchorOnly;

    let options = config.engine_options();
    assert_eq!(options.padding, FitPadding::uniform(10));
    assert_eq!(options.policy, ActivationPolicy::AnchorOnly);
}

#[test]
fn test_empty_layer_table_uses_builtin_catalog() {
    let catalog = Config::default().catalog().unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.locations(), vec!["Büro 3DQR", "MDR"]);
}

#[test]
fn test_configured_layers_replace_builtin_catalog() {
    let toml = r#"
[[layers]]
name = "Dom - Anker"
location = "Dom"
category = "anchor"
geometry = "point"
path = "dom/anker.geojson"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let catalog = config.catalog().unwrap();

    assert_eq!(catalog.len(), 1);
    let layer = catalog.get("Dom - Anker").unwrap();
    assert_eq!(layer.location_key, "Dom");
    assert_eq!(layer.geometry, Some(GeometryKind::Point));
}

#[test]
fn test_duplicate_layer_names_are_rejected() {
    let toml = r#"
[[layers]]
name = "A"
location = "X"
category = "anchor"
path = "a.geojson"

[[layers]]
name = "A"
location = "Y"
category = "narrative"
path = "b.geojson"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let err = config.catalog().unwrap_err();
    assert!(matches!(err, GeostageError::Catalog(_)));
    assert!(err.to_string().contains("duplicate layer name 'A'"));
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("GEOSTAGE_DATA_ROOT", "/srv/geo"),
            ("GEOSTAGE_BASE_URL", "http://localhost:8080/data"),
            ("GEOSTAGE_ACTIVATION_POLICY", "anchor-only"),
            ("GEOSTAGE_LOG", "info"),
        ]),
    );

    assert_eq!(config.data.root, std::path::PathBuf::from("/srv/geo"));
    assert_eq!(
        config.data.base_url.as_deref(),
        Some("http://localhost:8080/data")
    );
    assert_eq!(config.activation.policy, ActivationPolicy::AnchorOnly);
    assert_eq!(config.logging.level.as_deref(), Some("info"));
}

#[test]
fn test_env_override_ignores_unknown_policy() {
    let mut base = Config::default();
    base.activation.policy = ActivationPolicy::AnchorOnly;

    let config = apply_overrides(base, env(&[("GEOSTAGE_ACTIVATION_POLICY", "sometimes")]));
    assert_eq!(config.activation.policy, ActivationPolicy::AnchorOnly);
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("geostage.toml");

    fs::write(&path, "[map]\nzom = 12\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "zom");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("zoom".to_string()));
    assert!(warnings[0].to_string().contains("did you mean 'zoom'?"));
}

#[test]
fn test_config_load_reports_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("geostage.toml");

    fs::write(&path, "[activation]\npolicy = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, GeostageError::ConfigParse { .. }));
}

#[test]
fn test_discover_prefers_working_directory_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("geostage.toml"), "[map]\nzoom = 9\n").unwrap();

    let loaded = discover(None, dir.path()).unwrap();
    assert_eq!(loaded.config.map.zoom, 9);
    assert_eq!(loaded.path, Some(dir.path().join("geostage.toml")));
}

#[test]
fn test_discover_explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = discover(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, GeostageError::ConfigNotFound { .. }));
}

#[test]
fn test_discover_explicit_path_wins() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("geostage.toml"), "[map]\nzoom = 9\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[map]\nzoom = 17\n").unwrap();

    let loaded = discover(Some(&explicit), dir.path()).unwrap();
    assert_eq!(loaded.config.map.zoom, 17);
}
