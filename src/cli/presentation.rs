//! CLI presentation: text, json and toml formatters for merged configuration.

use crate::error::SiteError;
use crate::merger::MergedConfig;
use crate::settings::Settings;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_merged_toml(merged: &MergedConfig) -> Result<String, SiteError> {
    toml::to_string_pretty(merged)
        .map_err(|e| SiteError::ConfigError(format!("Cannot render TOML: {}", e)))
}

pub fn format_merged_text(merged: &MergedConfig) -> String {
    let mut output = format!("Package: {}\n", merged.package);
    output.push_str(&format!(
        "Prefix: {}\n",
        merged.prefix.as_deref().unwrap_or("(none)")
    ));
    output.push_str(&format!(
        "Mode: {}\n",
        if merged.errorware.is_debug() {
            "debug"
        } else {
            "production"
        }
    ));

    output.push_str("\nGlobal settings:\n");
    output.push_str(&settings_table(&merged.global_conf));
    output.push_str("\n\nApplication settings:\n");
    output.push_str(&settings_table(&merged.app_conf));

    output.push_str("\n\nTemplate options:\n");
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Option", "Value"]);
    for (key, value) in &merged.template_options {
        table.add_row(vec![key.clone(), value_text(value)]);
    }
    output.push_str(&table.to_string());

    if let Some(reporting) = merged.errorware.reporting() {
        output.push_str("\n\nError reporting:\n");
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Setting", "Value"]);
        table.add_row(vec![
            "error_email",
            reporting.error_email.as_deref().unwrap_or("(unset)"),
        ]);
        table.add_row(vec![
            "error_log",
            reporting.error_log.as_deref().unwrap_or("(unset)"),
        ]);
        table.add_row(vec!["smtp_server", reporting.smtp_server.as_str()]);
        table.add_row(vec!["error_subject_prefix", reporting.error_subject_prefix.as_str()]);
        table.add_row(vec!["from_address", reporting.from_address.as_str()]);
        table.add_row(vec!["error_message", reporting.error_message.as_str()]);
        output.push_str(&table.to_string());
    }
    output
}

fn settings_table(settings: &Settings) -> String {
    if settings.is_empty() {
        return "  (none)".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in settings.iter() {
        table.add_row(vec![key, value]);
    }
    table.to_string()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
