//! Integration tests for siteconf

mod cli_binary;
mod config_layering;
mod site_flow;
