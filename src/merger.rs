//! Configuration Merger
//!
//! Combines the deployment-wide (global) settings with the per-application
//! settings into a single [`MergedConfig`]: the routing prefix, the template
//! engine defaults and the error middleware options. Merging is deterministic;
//! the only mutation is recording the package name in the application settings.

use crate::settings::{AppConfig, GlobalConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod errorware;
pub mod prefix;
pub mod request;
pub mod templating;

pub use errorware::{build_errorware, ErrorReporting, Errorware};
pub use prefix::{apply_prefix, resolve_prefix};
pub use request::derive_prefix_from_request;
pub use templating::{build_templating_defaults, TemplateOptions, TemplatingDefaults};

/// Template engine whose name prefixes flattened template options.
pub const DEFAULT_ENGINE: &str = "myghty";

/// Application settings key that records the package name.
pub const PACKAGE_KEY: &str = "package";

/// Result of merging global and application settings.
#[derive(Debug, Clone, Serialize)]
pub struct MergedConfig {
    pub package: String,
    pub prefix: Option<String>,
    pub engine: String,
    pub templating: TemplatingDefaults,
    /// Templating defaults keyed as `<engine>.<option>`.
    pub template_options: TemplateOptions,
    pub errorware: Errorware,
    pub global_conf: GlobalConfig,
    pub app_conf: AppConfig,
}

/// Merges settings with the application's template configuration.
#[derive(Debug, Clone)]
pub struct ConfigMerger {
    engine: String,
    template_options: TemplateOptions,
    template_paths: Vec<PathBuf>,
}

impl ConfigMerger {
    pub fn new(template_options: TemplateOptions, template_paths: Vec<PathBuf>) -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            template_options,
            template_paths,
        }
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn template_paths(&self) -> &[PathBuf] {
        &self.template_paths
    }

    pub fn merge(&self, global: GlobalConfig, mut app: AppConfig, package: &str) -> MergedConfig {
        app.insert(PACKAGE_KEY, package);

        let prefix = resolve_prefix(&app, &global);
        let templating = build_templating_defaults(&self.template_options, &self.template_paths);
        let template_options = templating.flatten(&self.engine);
        let errorware = build_errorware(&global);

        debug!(
            engine = %self.engine,
            template_options = template_options.len(),
            "Built templating defaults"
        );
        info!(
            package,
            prefix = prefix.as_deref().unwrap_or(""),
            debug = errorware.is_debug(),
            "Merged application configuration"
        );

        MergedConfig {
            package: package.to_string(),
            prefix,
            engine: self.engine.clone(),
            templating,
            template_options,
            errorware,
            global_conf: global,
            app_conf: app,
        }
    }
}
