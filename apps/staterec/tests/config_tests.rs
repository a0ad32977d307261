//! Tests for configuration file resolution.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use staterec::config::{AppConfig, DEFAULT_CONFIG_FILE};
use staterec_core::{DuplicatePolicy, StateError};
use std::fs;

#[test]
fn test_resolve_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::resolve(None, dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_resolve_picks_up_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[registry]\nduplicates = \"reject\"\n\n[console]\nbanner = false\n",
    )
    .unwrap();

    let config = AppConfig::resolve(None, dir.path()).unwrap();
    assert_eq!(config.registry.duplicates, DuplicatePolicy::Reject);
    assert!(!config.console.banner);
}

#[test]
fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[registry]\nduplicates = \"reject\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[console]\njson_mode = true\n").unwrap();

    let config = AppConfig::resolve(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.registry.duplicates, DuplicatePolicy::Allow);
    assert!(config.console.json_mode);
}

#[test]
fn test_missing_explicit_path_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = AppConfig::resolve(Some(&missing), dir.path());
    assert!(matches!(result, Err(StateError::ConfigError(_))));
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[registry\nduplicates = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(err.is_fatal());
}
