//! Path group and mode-selector types for config loading.

use std::env;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, SeasonalError};

/// Environment variable overriding the base directory used to expand
/// relative path fragments in flat mode. Effective only when set and
/// non-empty.
pub const BASE_DIR_ENV: &str = "DATA_DIR";

/// Environment variable naming the active store in store-selection mode.
pub const STORE_ENV: &str = "DATA_STORE";

/// Store identifier used when `DATA_STORE` is unset.
pub const DEFAULT_STORE: &str = "lustre";

/// Key holding the base directory for fragment expansion. Never rewritten;
/// an empty value means no base directory is configured.
pub(crate) const HOME_KEY: &str = "home";

/// Key holding the output directory. Exempt from expansion but still
/// existence-checked.
pub(crate) const DIR_OUTPUT_KEY: &str = "dir_output";

/// Keys containing this marker hold bare filenames or glob patterns rather
/// than directories; they are never expanded or existence-checked.
pub(crate) const FILENAME_MARKER: &str = "filename";

/// How the `paths` section of a config document is interpreted.
///
/// The two modes are separate deployment shapes, selected once per load;
/// a single document is never read both ways. Environment lookups happen
/// in the `from_env` constructors, so the loader itself never touches the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathsMode {
    /// `paths` holds the active group directly. Relative fragments are
    /// expanded against a base directory before validation.
    Flat {
        /// Overrides the group's own `home` as expansion base when set.
        base_override: Option<String>,
    },

    /// `paths` maps store identifiers to groups. The named group is
    /// validated as-is; no fragment expansion is applied.
    Store {
        /// Store to select; [`DEFAULT_STORE`] when `None`.
        name: Option<String>,
    },
}

impl PathsMode {
    /// Flat mode with no base-directory override.
    #[allow(dead_code)]
    pub fn flat() -> Self {
        Self::Flat { base_override: None }
    }

    /// Flat mode with the base override taken from [`BASE_DIR_ENV`].
    ///
    /// An unset or empty variable means no override; expansion falls back
    /// to the group's own `home` entry.
    pub fn flat_from_env() -> Self {
        let base_override = env::var(BASE_DIR_ENV).ok().filter(|v| !v.is_empty());
        Self::Flat { base_override }
    }

    /// Store-selection mode with the store name taken from [`STORE_ENV`].
    pub fn store_from_env() -> Self {
        Self::Store {
            name: env::var(STORE_ENV).ok(),
        }
    }
}

/// A flat mapping of symbolic names to filesystem paths or filenames.
///
/// Entries keep the order they have in the YAML document; that order
/// determines which missing path is reported first when several are
/// missing at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGroup {
    entries: Vec<(String, String)>,
}

impl PathGroup {
    /// Build a path group from the YAML `paths` value.
    ///
    /// Every key and every value must be a string; anything else is a
    /// malformed document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mapping = value.as_mapping().ok_or_else(|| {
            SeasonalError::ConfigParse(
                "'paths' must be a mapping of names to strings".to_string(),
            )
        })?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = key.as_str().ok_or_else(|| {
                SeasonalError::ConfigParse(format!(
                    "'paths' keys must be strings (found {:?})",
                    key
                ))
            })?;
            let value = value.as_str().ok_or_else(|| {
                SeasonalError::ConfigParse(format!("path for '{}' must be a string", key))
            })?;
            entries.push((key.to_string(), value.to_string()));
        }

        Ok(Self { entries })
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert back into a YAML mapping, preserving entry order.
    pub fn to_value(&self) -> Value {
        let mut mapping = Mapping::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            mapping.insert(
                Value::String(key.clone()),
                Value::String(value.clone()),
            );
        }
        Value::Mapping(mapping)
    }
}
