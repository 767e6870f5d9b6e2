//! Configuration for qstories.
//!
//! Stored as TOML at `<config dir>/qstories/config.toml`, overridable with
//! the `QSTORIES_CONFIG` environment variable. Every field has a default,
//! so partial files load fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "QSTORIES_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub playback: PlaybackConfig,
    pub log: LogConfig,
}

/// Remote story API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API (without the `/stories` suffix)
    pub base_url: String,
    /// Bearer token sent verbatim in the Authorization header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            token: None,
            timeout_secs: 10,
        }
    }
}

/// Story playback timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How long image and text stories stay on screen
    pub image_duration_ms: u64,
    /// Ticker interval for image and text stories
    pub tick_interval_ms: u64,
    /// Pointer presses shorter than this count as taps, longer ones as holds
    pub hold_threshold_ms: u64,
    /// Video length assumed when the API does not report one
    pub video_fallback_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: 5000,
            tick_interval_ms: 50,
            hold_threshold_ms: 200,
            video_fallback_secs: 15.0,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive (RUST_LOG takes precedence)
    pub level: String,
    /// Log file path; defaults to the platform state/cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("qstories").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Reject values that would stall or spin the playback ticker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.playback;
        if p.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if p.image_duration_ms < p.tick_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "playback.image_duration_ms ({}) must be at least tick_interval_ms ({})",
                p.image_duration_ms, p.tick_interval_ms
            )));
        }
        if !(p.video_fallback_secs.is_finite() && p.video_fallback_secs > 0.0) {
            return Err(ConfigError::Invalid(
                "playback.video_fallback_secs must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}
