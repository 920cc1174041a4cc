//! Tests for configuration files
//!
//! These tests verify:
//! - Save/load round trip through a real file
//! - Partial files fall back to defaults
//! - Broken JSON and out-of-range values are rejected with context

use std::fs;
use tempfile::TempDir;
use ufoburgers::{ExperienceConfig, UfoError};

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ufo.json");

    let config = ExperienceConfig {
        mute: true,
        volume: 0.4,
        cell_width_px: 10,
        ..Default::default()
    };
    config.save_to_file(&path).unwrap();

    let loaded = ExperienceConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "tick_rate_ms": 50 }"#).unwrap();

    let loaded = ExperienceConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.tick_rate_ms, 50);
    assert_eq!(loaded.sample_rate, 44_100);
    assert!(!loaded.mute);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = ExperienceConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_invalid_json_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ mute: yes").unwrap();

    let err = ExperienceConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_out_of_range_values_fail_validation() {
    let cases = [
        ExperienceConfig {
            volume: -0.1,
            ..Default::default()
        },
        ExperienceConfig {
            sample_rate: 4000,
            ..Default::default()
        },
        ExperienceConfig {
            cell_width_px: 0,
            ..Default::default()
        },
        ExperienceConfig {
            tick_rate_ms: 5,
            ..Default::default()
        },
    ];
    for config in cases {
        assert!(config.validate().is_err(), "{:?} should be rejected", config);
    }
}

#[test]
fn test_validated_reports_config_error() {
    let config = ExperienceConfig {
        sample_rate: 4000,
        ..Default::default()
    };
    let err = config.validated().unwrap_err();
    assert!(matches!(err, UfoError::Config(_)));
    assert!(err.to_string().contains("Sample rate"));

    let ok = ExperienceConfig::default().validated().unwrap();
    assert_eq!(ok, ExperienceConfig::default());
}
