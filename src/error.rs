//! Error types for site configuration merging and lookup.

use thiserror::Error;

/// Errors raised while loading, merging, or reading site configuration.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Configuration not initialized: {0} was read before init_app")]
    NotInitialized(&'static str),

    #[error("Configuration already initialized; init_app may only run once")]
    AlreadyInitialized,

    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Invalid boolean for '{key}': {value:?}")]
    InvalidBool { key: String, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for SiteError {
    fn from(err: config::ConfigError) -> Self {
        SiteError::ConfigError(err.to_string())
    }
}
