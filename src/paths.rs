//! Centralized path definitions for strava-gears
//!
//! This module provides a single source of truth for all filesystem paths used
//! by strava-gears.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/strava-gears/
//! ├── config.json      # Client credentials and other settings
//! ├── tokens.json      # OAuth access/refresh tokens (mode 0600)
//! └── rules.toml       # Default auto-assign rules (optional)
//! ```
//!
//! Set `STRAVA_GEARS_CONFIG_DIR` to use a different directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "STRAVA_GEARS_CONFIG_DIR";

/// Directory name under the user config root
const APP_DIR: &str = "strava-gears";

/// Settings filename
const CONFIG_FILE: &str = "config.json";

/// Token filename
const TOKEN_FILE: &str = "tokens.json";

/// Default rules filename
const RULES_FILE: &str = "rules.toml";

/// Get the configuration directory.
///
/// Returns `$STRAVA_GEARS_CONFIG_DIR` when set, otherwise
/// `~/.config/strava-gears/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".config")
        .join(APP_DIR)
}

/// Get path to `config.json` inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Get path to `tokens.json` inside `dir`.
#[must_use]
pub fn token_file(dir: &Path) -> PathBuf {
    dir.join(TOKEN_FILE)
}

/// Get path to the default `rules.toml`.
#[must_use]
pub fn default_rules_file() -> PathBuf {
    config_dir().join(RULES_FILE)
}
