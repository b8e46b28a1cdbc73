//! CLI parse: clap types for siteconf. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// siteconf CLI - inspect merged web application configuration
#[derive(Parser)]
#[command(name = "siteconf")]
#[command(about = "Merge global and application settings and inspect the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides layered config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the merged configuration
    Show {
        /// Output format (text, json or toml)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print error middleware settings as JSON
    Errorware,
    /// Print flattened template engine options as JSON
    TemplateOptions,
    /// Print the URL prefix a request would use
    Prefix {
        /// SCRIPT_NAME of the request
        #[arg(long, default_value = "")]
        script_name: String,
    },
    /// Read one application setting
    Get {
        key: String,
        /// Fail when the key is missing instead of printing an empty value
        #[arg(long)]
        strict: bool,
    },
    /// Convert a module name to a class name
    ClassName { module: String },
}
