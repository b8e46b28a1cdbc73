//! Per-request prefix lookup.

use super::prefix::PREFIX_KEY;
use crate::settings::AppConfig;

/// Prefix for URL generation during a request.
///
/// Uses the application's configured prefix, then the request's script name.
/// Requests can arrive before configuration is loaded (for example while an
/// early error page renders), so a missing configuration yields `""` rather
/// than an error.
pub fn derive_prefix_from_request(app: Option<&AppConfig>, script_name: &str) -> String {
    if let Some(prefix) = app.and_then(|app| app.get_nonempty(PREFIX_KEY)) {
        return prefix.to_string();
    }
    script_name.to_string()
}
