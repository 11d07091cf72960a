// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use eyepiece::Config;
use eyepiece::SelectionPolicy;
use eyepiece::backends::camera::LensFacing;
use eyepiece::config::{load_from_path, save_to_path};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.selection_policy, SelectionPolicy::MaxArea);
    assert!(
        config.rotation_aware_pan,
        "Rotation-aware panning should be enabled by default"
    );
    assert_eq!(config.lens_facing, LensFacing::Back);
    assert_eq!(config.default_opacity, 0.5);
}

#[test]
fn test_default_config_is_already_sanitized() {
    let config = Config::default();
    assert_eq!(config.sanitized(), config);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("config.json");

    let config = Config {
        lens_facing: LensFacing::Front,
        ..Config::default()
    };
    save_to_path(&config, &path).expect("failed to save config");

    let content = std::fs::read_to_string(&path).expect("failed to read config");
    assert!(content.contains("\"lens_facing\": \"Front\""));

    assert_eq!(load_from_path(&path).expect("failed to load config"), config);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let result = load_from_path(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(eyepiece::AppError::Io(_))));
}
