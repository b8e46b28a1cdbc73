//! Routing seam: the prefix and "recompute routes" signal the merger sends to
//! the application's route mapper.

use std::collections::BTreeMap;
use tracing::debug;

/// Route mapper owned by the application and adjusted during `init_app`.
pub trait RouteMapper {
    /// Mount every route under `prefix`.
    fn set_prefix(&mut self, prefix: &str);

    /// Mark compiled routes stale so they are rebuilt on next use.
    fn invalidate(&mut self);
}

/// Minimal named route table with lazy, prefix-aware compilation.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    prefix: Option<String>,
    routes: BTreeMap<String, String>,
    compiled: Option<BTreeMap<String, String>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under `name`. Invalidates compiled routes.
    pub fn connect(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
        self.compiled = None;
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }

    /// Rebuild full paths for every route using the current prefix.
    pub fn compile(&mut self) {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let compiled = self
            .routes
            .iter()
            .map(|(name, path)| (name.clone(), join_prefix(prefix, path)))
            .collect();
        debug!(routes = self.routes.len(), prefix, "Compiled route table");
        self.compiled = Some(compiled);
    }

    /// Full path for a named route, compiling first when stale.
    pub fn url_for(&mut self, name: &str) -> Option<String> {
        if self.compiled.is_none() {
            self.compile();
        }
        self.compiled.as_ref()?.get(name).cloned()
    }
}

impl RouteMapper for RouteTable {
    fn set_prefix(&mut self, prefix: &str) {
        let trimmed = prefix.trim_end_matches('/');
        self.prefix = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    fn invalidate(&mut self) {
        self.compiled = None;
    }
}

fn join_prefix(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", prefix, path)
    } else {
        format!("{}/{}", prefix, path)
    }
}
