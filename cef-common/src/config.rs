//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (both handled by the binary's `clap` parser)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "cef-dashboard";

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub max_upload_mb: Option<usize>,
    pub log_level: Option<String>,
}

/// Values used when neither CLI, environment nor TOML provide one
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub bind: String,
    pub port: u16,
    pub max_upload_mb: usize,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8050,
            max_upload_mb: 10,
            log_level: "info".to_string(),
        }
    }
}

/// Settings supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub max_upload_mb: Option<usize>,
    pub log_level: Option<String>,
}

/// Fully resolved dashboard settings
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub bind: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub log_level: String,
}

impl DashboardConfig {
    pub fn resolve(overrides: &ConfigOverrides, toml: &TomlConfig) -> Self {
        let defaults = CompiledDefaults::default();

        let max_upload_mb = overrides
            .max_upload_mb
            .or(toml.max_upload_mb)
            .unwrap_or(defaults.max_upload_mb);

        Self {
            bind: overrides
                .bind
                .clone()
                .or_else(|| toml.bind.clone())
                .unwrap_or(defaults.bind),
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
            log_level: overrides
                .log_level
                .clone()
                .or_else(|| toml.log_level.clone())
                .unwrap_or(defaults.log_level),
        }
    }

    /// `host:port` string for binding the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Platform config file location (`~/.config/cef-dashboard/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Load TOML settings
///
/// An explicit path must exist. Without one, the platform default is tried
/// and a missing file falls back to defaults with a warning. A file that
/// exists but does not parse is always an error.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                warn!("No config file at {} (using defaults)", path.display());
                return Ok(TomlConfig::default());
            }
            None => {
                warn!("Could not determine config directory (using defaults)");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DashboardConfig::resolve(&ConfigOverrides::default(), &TomlConfig::default());
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 8050);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.listen_addr(), "127.0.0.1:8050");
    }

    #[test]
    fn test_overrides_beat_toml() {
        let toml = TomlConfig {
            bind: Some("0.0.0.0".to_string()),
            port: Some(9000),
            max_upload_mb: Some(2),
            log_level: Some("debug".to_string()),
        };
        let overrides = ConfigOverrides {
            port: Some(9100),
            ..Default::default()
        };

        let config = DashboardConfig::resolve(&overrides, &toml);
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_toml_parses() {
        let config: TomlConfig = toml::from_str("port = 8080\n").unwrap();
        assert_eq!(config.port, Some(8080));
        assert!(config.bind.is_none());
    }
}
