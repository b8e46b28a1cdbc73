//! Routing prefix resolution.

use crate::routing::RouteMapper;
use crate::settings::{AppConfig, GlobalConfig};
use tracing::debug;

pub const PREFIX_KEY: &str = "prefix";

/// Resolve the mount prefix: the application's value wins over the global one.
///
/// Empty strings count as unset at both levels.
pub fn resolve_prefix(app: &AppConfig, global: &GlobalConfig) -> Option<String> {
    app.get_nonempty(PREFIX_KEY)
        .or_else(|| global.get_nonempty(PREFIX_KEY))
        .map(str::to_string)
}

/// Mount `routes` under `prefix` and mark them for recompilation.
///
/// Returns whether the mapper was touched.
pub fn apply_prefix<R: RouteMapper + ?Sized>(routes: &mut R, prefix: Option<&str>) -> bool {
    match prefix {
        Some(prefix) => {
            debug!(prefix, "Applying routing prefix");
            routes.set_prefix(prefix);
            routes.invalidate();
            true
        }
        None => false,
    }
}
