//! Siteconf: configuration merging for web applications
//!
//! Merges deployment-wide and per-application settings into one read-only
//! configuration: the URL prefix routes are mounted under, template engine
//! defaults, and error middleware options.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod merger;
pub mod naming;
pub mod routing;
pub mod settings;
pub mod site;

pub use error::SiteError;
pub use merger::{ConfigMerger, MergedConfig};
pub use settings::{AppConfig, GlobalConfig, Settings};
pub use site::{SiteConfig, SitePaths};
