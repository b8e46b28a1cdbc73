//! User config file source: $XDG_CONFIG_HOME/siteconf/config.toml or ~/.config/siteconf/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use tracing::{debug, warn};

use crate::config::paths::global_config_path;

/// Add the user config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(user_config_path) = global_config_path() {
        if user_config_path.exists() {
            let canonical = user_config_path
                .canonicalize()
                .unwrap_or_else(|_| user_config_path.clone());
            debug!(config_path = %canonical.display(), "Loading user configuration");
            builder = builder.add_source(File::from(canonical).required(false));
        } else {
            warn!(
                config_path = %user_config_path.display(),
                "User configuration file not found; using project and built-in settings"
            );
        }
    }
    Ok(builder)
}
