//! Centralized path definitions for tubeseo
//!
//! ## Layout
//!
//! ```text
//! <config_dir>/tubeseo/
//! └── config.toml               # API key, region, reference URL, thresholds
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux).
//! Setting `TUBESEO_CONFIG_DIR` replaces the whole `<config_dir>/tubeseo`
//! directory, which keeps tests away from the real config.

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TUBESEO_CONFIG_DIR";

/// Application directory name under the platform config directory
const APP_DIR: &str = "tubeseo";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the tubeseo config directory.
///
/// Returns `$TUBESEO_CONFIG_DIR` when set, else `<config_dir>/tubeseo/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the config file path.
///
/// Returns `<config dir>/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
