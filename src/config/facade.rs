//! Config loader: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{environment, global_file, project_file};
use super::DeploymentConfig;
use crate::error::SiteError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads deployment configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for the project at `project_root`.
    ///
    /// Precedence (lowest to highest): built-in defaults, user config file,
    /// `config/config.toml`, `config/{SITECONF_ENV}.toml`, environment.
    pub fn load(project_root: &Path) -> Result<DeploymentConfig, SiteError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let builder = environment::add_to_builder(builder);

        let config: DeploymentConfig = builder.build()?.try_deserialize()?;
        debug!(
            project_root = %project_root.display(),
            package = %config.package,
            "Loaded deployment configuration"
        );
        Ok(config)
    }

    /// Load a single explicit file over the built-in defaults and environment.
    pub fn load_from_file(path: &Path) -> Result<DeploymentConfig, SiteError> {
        if !path.exists() {
            return Err(SiteError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);

        let config: DeploymentConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded deployment configuration file");
        Ok(config)
    }

    /// User config file path, if a config home can be determined.
    pub fn user_config_path() -> Option<PathBuf> {
        super::paths::global_config_path()
    }
}
