//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SiteError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &SiteError) -> String {
    match e {
        SiteError::MissingKey(key) => format!("Setting '{}' is not configured", key),
        other => other.to_string(),
    }
}
