//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SpectatorError, SpectatorResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default cursor mapping parameters.
    pub mapping: MappingDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default cursor mapping parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingDefaults {
    /// Widget size used when the caller does not supply one.
    pub widget_width: f64,
    pub widget_height: f64,

    /// Target resolution used for middle-pivot offsets.
    pub target_width: f64,
    pub target_height: f64,

    /// Clamp pointer percentages to `[0.0, 1.0]` before scaling.
    pub clamp_percentages: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "spectator=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for MappingDefaults {
    fn default() -> Self {
        Self {
            widget_width: 1920.0,
            widget_height: 1080.0,
            target_width: 1920.0,
            target_height: 1080.0,
            clamp_percentages: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`AppConfig::load`], any
    /// failure is reported to the caller.
    pub fn load_from(path: &Path) -> SpectatorResult<Self> {
        if !path.exists() {
            return Err(SpectatorError::file_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Reject sizes the mapper cannot scale into.
    pub fn validate(&self) -> SpectatorResult<()> {
        let m = &self.mapping;
        let sizes = [
            ("widget_width", m.widget_width),
            ("widget_height", m.widget_height),
            ("target_width", m.target_width),
            ("target_height", m.target_height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpectatorError::config(format!(
                    "mapping.{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("spectator").join("config.json")
}
