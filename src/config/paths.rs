//! Locations of user-level configuration.

use crate::error::SiteError;
use std::path::PathBuf;

pub const APP_DIR: &str = "siteconf";

/// User configuration home: `$XDG_CONFIG_HOME`, else `$HOME/.config`.
pub fn config_home() -> Result<PathBuf, SiteError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home).join(".config"));
    }
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SiteError::ConfigError("Cannot determine configuration home".to_string()))
}

/// Path of the user-level config file, if a config home can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    config_home()
        .ok()
        .map(|home| home.join(APP_DIR).join("config.toml"))
}
