//! Settings Mapping
//!
//! Flat string-keyed settings used for both the deployment-wide (global) and the
//! per-application configuration. A single mapping type carries two lookup
//! flavors: strict lookups that fail on a missing key and lenient lookups that
//! fall back to an empty string.

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod convert;

/// Longest value representation shown in full by `Display`.
const REPR_MAX_LEN: usize = 70;
const REPR_HEAD_LEN: usize = 60;
const REPR_TAIL_LEN: usize = 5;

/// Ordered string -> string settings mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

/// Deployment-wide defaults (the `[global]` section).
pub type GlobalConfig = Settings;

/// Per-application overrides (the `[app]` section).
pub type AppConfig = Settings;

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, failing with `MissingKey` when it is absent.
    pub fn get_strict(&self, key: &str) -> Result<&str, SiteError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| SiteError::MissingKey(key.to_string()))
    }

    /// Look up a key, returning an empty string when it is absent.
    pub fn get_lenient(&self, key: &str) -> &str {
        self.get_or(key, "")
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key` if present and not empty.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Read `key` as a boolean, using `default` when absent.
    ///
    /// Present but unrecognized values are an error; callers that prefer a
    /// lenient reading use [`convert::as_bool`] directly.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, SiteError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => convert::as_bool(raw).ok_or_else(|| SiteError::InvalidBool {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Settings {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Settings {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

fn value_repr(value: &str) -> String {
    let repr = format!("{:?}", value);
    let chars: Vec<char> = repr.chars().collect();
    if chars.len() <= REPR_MAX_LEN {
        return repr;
    }
    let head: String = chars[..REPR_HEAD_LEN].iter().collect();
    let tail: String = chars[chars.len() - REPR_TAIL_LEN..].iter().collect();
    format!("{}...{}", head, tail)
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Underscore-prefixed keys are private to the application.
        let parts: Vec<String> = self
            .iter()
            .filter(|(k, _)| !k.starts_with('_'))
            .map(|(k, v)| format!(" {}={}", k, value_repr(v)))
            .collect();
        write!(f, "<Settings{}>", parts.join(","))
    }
}
