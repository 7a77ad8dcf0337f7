use tempfile::tempdir;

use crate::model::{ColorMap, ScaleLimits};

use super::{ConfigError, ViewerConfig, is_yaml, load_config, save_config};

#[test]
fn defaults_are_valid() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.scale, ScaleLimits { min: 0.05, max: 3.0 });
    assert!(config.history.drop_no_op_merges);
    assert_eq!(config.history.undo_limit, None);
}

#[test]
fn partial_yaml_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("viewer.yaml");
    std::fs::write(
        &path,
        "volume:\n  width: 32\n  slices: 8\ndefaults:\n  secondary_color_map: jet\n",
    )
    .expect("write config");
    let config = load_config(&path).expect("load config");
    assert_eq!(config.volume.width, 32);
    assert_eq!(config.volume.height, 256);
    assert_eq!(config.volume.slices, 8);
    assert_eq!(config.defaults.secondary_color_map, ColorMap::Jet);
    assert_eq!(config.defaults.contrast, 1.0);
}

#[test]
fn json_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("viewer.json");
    let mut config = ViewerConfig::default();
    config.history.undo_limit = Some(20);
    config.volume.time_points = 3;
    save_config(&path, &config).expect("save config");
    let restored = load_config(&path).expect("load config");
    assert_eq!(restored, config);
}

#[test]
fn inverted_scale_limits_are_rejected() {
    let config = ViewerConfig {
        scale: ScaleLimits { min: 2.0, max: 1.0 },
        ..ViewerConfig::default()
    };
    let error = config.validate().expect_err("min above max");
    assert!(matches!(error, ConfigError::Invalid(_)));
    assert!(error.to_string().contains("scale.max"));
}

#[test]
fn empty_volume_is_rejected_on_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("viewer.json");
    std::fs::write(&path, r#"{"volume": {"slices": 0}}"#).expect("write config");
    assert!(load_config(&path).is_err());
}

#[test]
fn format_follows_extension_case_insensitively() {
    assert!(is_yaml(std::path::Path::new("viewer.YML")));
    assert!(is_yaml(std::path::Path::new("script.yaml")));
    assert!(!is_yaml(std::path::Path::new("report.json")));
    assert!(!is_yaml(std::path::Path::new("settings")));
}
