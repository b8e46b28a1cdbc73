//! Templating defaults: the base options handed to the template renderer.

use crate::settings::convert::as_list;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Caller-supplied template engine options.
pub type TemplateOptions = Map<String, Value>;

pub const RAISE_ERROR: &str = "raise_error";
pub const ALLOW_GLOBALS: &str = "allow_globals";
pub const COMPONENT_ROOT: &str = "component_root";

/// Globals every template may reference.
pub const DEFAULT_ALLOW_GLOBALS: [&str; 6] = ["c", "h", "session", "request", "params", "g"];

/// Merged template engine options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplatingDefaults {
    options: TemplateOptions,
}

impl TemplatingDefaults {
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn raise_error(&self) -> bool {
        self.options
            .get(RAISE_ERROR)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn allow_globals(&self) -> Vec<&str> {
        self.options
            .get(ALLOW_GLOBALS)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// `(base name, full path)` pairs in search order.
    pub fn component_root(&self) -> Vec<(String, PathBuf)> {
        let Some(entries) = self.options.get(COMPONENT_ROOT).and_then(Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|entry| {
                entry
                    .iter()
                    .filter_map(|(name, path)| Some((name.clone(), PathBuf::from(path.as_str()?))))
            })
            .collect()
    }

    /// Options keyed as `<engine>.<option>` for the renderer.
    pub fn flatten(&self, engine: &str) -> TemplateOptions {
        self.options
            .iter()
            .map(|(key, value)| (format!("{}.{}", engine, key), value.clone()))
            .collect()
    }
}

/// Build templating defaults and overlay the caller's options on top.
///
/// Caller values replace defaults, except `allow_globals`, which is appended
/// to the default globals without duplicates.
pub fn build_templating_defaults(
    existing: &TemplateOptions,
    search_paths: &[PathBuf],
) -> TemplatingDefaults {
    let mut allow_globals: Vec<String> =
        DEFAULT_ALLOW_GLOBALS.iter().map(|g| g.to_string()).collect();
    for global in existing_globals(existing) {
        if !allow_globals.contains(&global) {
            allow_globals.push(global);
        }
    }

    let component_root: Vec<Value> = search_paths
        .iter()
        .map(|path| {
            let mut entry = Map::new();
            entry.insert(
                base_name(path),
                Value::String(path.to_string_lossy().into_owned()),
            );
            Value::Object(entry)
        })
        .collect();

    let mut options = TemplateOptions::new();
    options.insert(RAISE_ERROR.to_string(), Value::Bool(true));
    options.insert(COMPONENT_ROOT.to_string(), Value::Array(component_root));

    for (key, value) in existing {
        if key != ALLOW_GLOBALS {
            options.insert(key.clone(), value.clone());
        }
    }
    options.insert(
        ALLOW_GLOBALS.to_string(),
        Value::Array(allow_globals.into_iter().map(Value::String).collect()),
    );

    TemplatingDefaults { options }
}

fn existing_globals(existing: &TemplateOptions) -> Vec<String> {
    match existing.get(ALLOW_GLOBALS) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(raw)) => as_list(raw),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item.as_str() {
                Some(name) => Some(name.to_string()),
                None => {
                    warn!(value = %item, "Ignoring non-string template global");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(value = %other, "Ignoring malformed allow_globals option");
            Vec::new()
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
