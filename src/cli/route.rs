//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_json, format_merged_text, format_merged_toml};
use crate::config::{ConfigLoader, DeploymentConfig};
use crate::error::SiteError;
use crate::naming::class_name_from_module_name;
use crate::routing::RouteTable;
use crate::site::SiteConfig;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Runtime context for CLI execution: project root and loaded deployment config.
pub struct RunContext {
    project_root: PathBuf,
    deployment: DeploymentConfig,
}

impl RunContext {
    /// Load configuration from an explicit file or the layered project sources.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SiteError> {
        let deployment = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        if let Err(errors) = deployment.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(SiteError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            )));
        }
        Ok(Self {
            project_root,
            deployment,
        })
    }

    pub fn deployment(&self) -> &DeploymentConfig {
        &self.deployment
    }

    /// Site configuration initialized from the loaded deployment settings.
    pub fn site(&self) -> Result<SiteConfig<RouteTable>, SiteError> {
        let mut site = self.deployment.site(&self.project_root, RouteTable::new());
        site.init_app(
            self.deployment.global.clone(),
            self.deployment.app.clone(),
            &self.deployment.package,
        )?;
        Ok(site)
    }

    pub fn execute(&self, command: &Commands) -> Result<String, SiteError> {
        debug!(?command, "Dispatching command");
        match command {
            Commands::Show { format } => {
                let merged = self.site()?.merged()?;
                match format.as_str() {
                    "json" => Ok(format_json(merged.as_ref())),
                    "toml" => format_merged_toml(&merged),
                    "text" => Ok(format_merged_text(&merged)),
                    other => Err(SiteError::ConfigError(format!(
                        "Invalid output format: {} (must be 'text', 'json' or 'toml')",
                        other
                    ))),
                }
            }
            Commands::Errorware => Ok(format_json(self.site()?.errorware()?)),
            Commands::TemplateOptions => Ok(format_json(self.site()?.template_options()?)),
            Commands::Prefix { script_name } => Ok(self.site()?.request_prefix(script_name)),
            Commands::Get { key, strict } => {
                let site = self.site()?;
                let app_conf = site.app_conf()?;
                if *strict {
                    Ok(app_conf.get_strict(key)?.to_string())
                } else {
                    if !app_conf.contains_key(key) {
                        warn!(key = %key, "Setting not configured; printing empty value");
                    }
                    Ok(app_conf.get_lenient(key).to_string())
                }
            }
            Commands::ClassName { module } => Ok(class_name_from_module_name(module)),
        }
    }
}
