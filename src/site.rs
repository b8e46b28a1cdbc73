//! Site Configuration
//!
//! Per-application configuration object. It is built before the deployment
//! settings are known, initialized once with `init_app`, and afterwards shared
//! read-only with request handlers as an `Arc<MergedConfig>`.

use crate::error::SiteError;
use crate::merger::{
    apply_prefix, derive_prefix_from_request, ConfigMerger, Errorware, MergedConfig,
    TemplateOptions,
};
use crate::routing::RouteMapper;
use crate::settings::{AppConfig, GlobalConfig, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Filesystem locations belonging to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    /// Template search paths, in lookup order.
    pub templates: Vec<PathBuf>,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            templates: Vec::new(),
        }
    }

    pub fn with_templates<I, P>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let resolved: Vec<PathBuf> = templates
            .into_iter()
            .map(|p| self.resolve(p.as_ref()))
            .collect();
        self.templates = resolved;
        self
    }

    /// Absolute form of `path`, relative paths taken from `root`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Application configuration with one-time initialization.
pub struct SiteConfig<R: RouteMapper> {
    merger: ConfigMerger,
    routes: R,
    paths: SitePaths,
    environ_config: Settings,
    merged: Option<Arc<MergedConfig>>,
}

impl<R: RouteMapper> SiteConfig<R> {
    pub fn new(template_options: TemplateOptions, routes: R, paths: SitePaths) -> Self {
        Self {
            merger: ConfigMerger::new(template_options, paths.templates.clone()),
            routes,
            paths,
            environ_config: Settings::new(),
            merged: None,
        }
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.merger = self.merger.with_engine(engine);
        self
    }

    /// Request environment keys where externally provided services
    /// (for example `session` or `cache`) are picked up.
    pub fn with_environ_config(mut self, environ_config: Settings) -> Self {
        self.environ_config = environ_config;
        self
    }

    /// Merge deployment settings into this application's configuration.
    ///
    /// Records `package` in the application settings and mounts the routes
    /// under the resolved prefix. Runs once; later calls fail.
    pub fn init_app(
        &mut self,
        global_conf: GlobalConfig,
        app_conf: AppConfig,
        package: &str,
    ) -> Result<Arc<MergedConfig>, SiteError> {
        if self.merged.is_some() {
            warn!(package, "Ignoring repeated configuration initialization");
            return Err(SiteError::AlreadyInitialized);
        }

        let merged = Arc::new(self.merger.merge(global_conf, app_conf, package));
        if apply_prefix(&mut self.routes, merged.prefix.as_deref()) {
            debug!("Routes marked for recompilation");
        }
        self.merged = Some(Arc::clone(&merged));
        Ok(merged)
    }

    pub fn is_initialized(&self) -> bool {
        self.merged.is_some()
    }

    /// Shared handle to the merged configuration.
    pub fn merged(&self) -> Result<Arc<MergedConfig>, SiteError> {
        self.merged_ref("merged configuration").map(Arc::clone)
    }

    fn merged_ref(&self, what: &'static str) -> Result<&Arc<MergedConfig>, SiteError> {
        self.merged.as_ref().ok_or(SiteError::NotInitialized(what))
    }

    pub fn errorware(&self) -> Result<&Errorware, SiteError> {
        Ok(&self.merged_ref("errorware")?.errorware)
    }

    pub fn template_options(&self) -> Result<&TemplateOptions, SiteError> {
        Ok(&self.merged_ref("template_options")?.template_options)
    }

    pub fn prefix(&self) -> Result<Option<&str>, SiteError> {
        Ok(self.merged_ref("prefix")?.prefix.as_deref())
    }

    pub fn package(&self) -> Result<&str, SiteError> {
        Ok(&self.merged_ref("package")?.package)
    }

    pub fn global_conf(&self) -> Result<&GlobalConfig, SiteError> {
        Ok(&self.merged_ref("global_conf")?.global_conf)
    }

    pub fn app_conf(&self) -> Result<&AppConfig, SiteError> {
        Ok(&self.merged_ref("app_conf")?.app_conf)
    }

    /// Application setting `key`, or `default` when unset.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, SiteError> {
        Ok(self.merged_ref("app_conf")?.app_conf.get_or(key, default))
    }

    /// URL prefix for a request; never fails, even before initialization.
    pub fn request_prefix(&self, script_name: &str) -> String {
        derive_prefix_from_request(
            self.merged.as_deref().map(|merged| &merged.app_conf),
            script_name,
        )
    }

    pub fn routes(&self) -> &R {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut R {
        &mut self.routes
    }

    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    pub fn environ_config(&self) -> &Settings {
        &self.environ_config
    }

    pub fn engine(&self) -> &str {
        self.merger.engine()
    }
}
