//! Configuration System
//!
//! Deployment configuration loaded from layered sources: built-in defaults, the
//! user config file, project files, then `SITECONF__*` environment overrides.
//! The loaded `[global]` and `[app]` tables feed the merger; `[templates]`
//! describes the application's template setup.

use crate::logging::LoggingConfig;
use crate::merger::{TemplateOptions, DEFAULT_ENGINE};
use crate::routing::RouteMapper;
use crate::settings::Settings;
use crate::site::{SiteConfig, SitePaths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{config_home, global_config_path};

/// Root of a deployment configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Application package name
    #[serde(default)]
    pub package: String,

    /// Deployment-wide defaults
    #[serde(default)]
    pub global: Settings,

    /// Application settings
    #[serde(default)]
    pub app: Settings,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Template engine setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Template search paths, relative to the project root unless absolute
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    /// Options passed through to the engine
    #[serde(default)]
    pub options: TemplateOptions,
}

fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            search_paths: Vec::new(),
            options: TemplateOptions::new(),
        }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            global: Settings::new(),
            app: Settings::new(),
            templates: TemplatesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Package(String),
    Templates(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Package(msg) => write!(f, "Package: {}", msg),
            ValidationError::Templates(msg) => write!(f, "Templates: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TemplatesConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.engine.is_empty() {
            return Err("Engine name cannot be empty".to_string());
        }
        if self.engine.contains('.') {
            return Err(format!("Engine name '{}' cannot contain '.'", self.engine));
        }
        if self.search_paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err("Search paths cannot be empty".to_string());
        }
        Ok(())
    }
}

impl DeploymentConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.package.is_empty() {
            errors.push(ValidationError::Package("Package name is required".to_string()));
        } else if !self
            .package
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            errors.push(ValidationError::Package(format!(
                "Invalid package name '{}' (use letters, digits, '_' or '-')",
                self.package
            )));
        }

        if let Err(e) = self.templates.validate() {
            errors.push(ValidationError::Templates(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn site_paths(&self, project_root: &Path) -> SitePaths {
        SitePaths::new(project_root).with_templates(&self.templates.search_paths)
    }

    /// Uninitialized site configuration for this deployment.
    pub fn site<R: RouteMapper>(&self, project_root: &Path, routes: R) -> SiteConfig<R> {
        SiteConfig::new(
            self.templates.options.clone(),
            routes,
            self.site_paths(project_root),
        )
        .with_engine(self.templates.engine.clone())
    }
}
