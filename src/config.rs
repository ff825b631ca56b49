//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/tubeseo/config.toml` (XDG standard).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{DEFAULT_SUGGESTION_THRESHOLD, research::DEFAULT_RESEARCH_RESULTS};
use crate::paths;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Keys accepted by [`GlobalConfig::set`]
pub const KEYS: &[&str] = &[
    "reference.url",
    "reference.timeout_secs",
    "api.key",
    "api.region_code",
    "api.max_results",
    "optimizer.suggestion_threshold",
];

/// Errors reading or updating the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key is not one of [`KEYS`]
    #[error("unknown config key '{0}' (expected one of: {keys})", keys = KEYS.join(", "))]
    UnknownKey(String),

    /// Value does not parse for the key
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        /// Config key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Filesystem failure
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config could not be encoded
    #[error("failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Global tubeseo configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Power-word source
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Video platform access
    #[serde(default)]
    pub api: ApiConfig,
    /// Title optimizer tuning
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

/// Power-word source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// URL of a JSON array of power words; unset means built-in only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Download timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Video platform settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key, used when neither the flag nor the environment supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Region code for keyword research (e.g. `US`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Search results analyzed by keyword research
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

const fn default_max_results() -> u32 {
    DEFAULT_RESEARCH_RESULTS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            region_code: None,
            max_results: default_max_results(),
        }
    }
}

/// Title optimizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Titles scoring below this get alternatives
    #[serde(default = "default_threshold")]
    pub suggestion_threshold: u8,
}

const fn default_threshold() -> u8 {
    DEFAULT_SUGGESTION_THRESHOLD
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            suggestion_threshold: default_threshold(),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or defaults if missing or malformed
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set a dotted key such as `api.region_code`.
    ///
    /// An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());

        match key {
            "reference.url" => self.reference.url = optional(value),
            "reference.timeout_secs" => {
                self.reference.timeout_secs =
                    value.parse().ok().filter(|s| *s > 0).ok_or_else(invalid)?;
            },
            "api.key" => self.api.key = optional(value),
            "api.region_code" => self.api.region_code = optional(value).map(|r| r.to_uppercase()),
            "api.max_results" => {
                self.api.max_results =
                    value.parse().ok().filter(|n| (1..=50).contains(n)).ok_or_else(invalid)?;
            },
            "optimizer.suggestion_threshold" => {
                self.optimizer.suggestion_threshold =
                    value.parse().ok().filter(|t| *t <= 100).ok_or_else(invalid)?;
            },
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Pick the API key: explicit flag, then environment, then config
    #[must_use]
    pub fn resolve_api_key(&self, flag: Option<&str>, env: Option<&str>) -> Option<String> {
        [flag, env, self.api.key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|k| !k.is_empty())
            .map(ToString::to_string)
    }
}
