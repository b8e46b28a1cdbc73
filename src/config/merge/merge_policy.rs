//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::merger::DEFAULT_ENGINE;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key, so a project file can
/// change one `[global]` entry without restating the rest.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("package", "")?
        .set_default("templates.engine", DEFAULT_ENGINE)?
        .set_default("templates.search_paths", Vec::<String>::new())
}
