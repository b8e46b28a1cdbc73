//! Project config file source: config/config.toml and config/{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

pub const ENV_VAR: &str = "SITECONF_ENV";
pub const DEFAULT_ENV: &str = "development";

/// Add project config files to builder.
/// Precedence: config/config.toml (base) then config/{SITECONF_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = project_root.join("config");
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = builder;

    let base_config_path = config_dir.join("config.toml");
    if base_config_path.exists() {
        debug!(config_path = %base_config_path.display(), "Loading project configuration");
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    let env_config_path = config_dir.join(format!("{}.toml", env_name));
    if env_config_path.exists() {
        debug!(config_path = %env_config_path.display(), env = %env_name, "Loading environment configuration");
        builder = builder.add_source(File::from(env_config_path).required(false));
    }

    Ok(builder)
}
