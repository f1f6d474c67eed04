//! Tests for TOML configuration loading and graceful degradation
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial] so they
//! run sequentially.

use cef_common::config::{load_toml_config, ConfigOverrides, DashboardConfig, TomlConfig};
use cef_common::Error;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "bind = \"0.0.0.0\"\nport = 9001\nmax_upload_mb = 4\n").unwrap();

    let toml = load_toml_config(Some(&path)).unwrap();
    assert_eq!(toml.port, Some(9001));

    let config = DashboardConfig::resolve(&ConfigOverrides::default(), &toml);
    assert_eq!(config.listen_addr(), "0.0.0.0:9001");
    assert_eq!(config.max_upload_bytes, 4 * 1024 * 1024);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_toml_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "port = \"not a number\"\n").unwrap();

    let err = load_toml_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_missing_default_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let toml = load_toml_config(None).unwrap();
    assert_eq!(toml, TomlConfig::default());

    env::remove_var("XDG_CONFIG_HOME");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_file_location_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("cef-dashboard");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "log_level = \"debug\"\n").unwrap();
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let toml = load_toml_config(None).unwrap();
    assert_eq!(toml.log_level.as_deref(), Some("debug"));

    env::remove_var("XDG_CONFIG_HOME");
}
