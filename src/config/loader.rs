//! Config loading and path resolution.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::types::{DEFAULT_STORE, PathGroup, PathsMode};
use crate::error::{Result, SeasonalError};

/// Key of the mandatory path section in a config document.
const PATHS_KEY: &str = "paths";

/// A fully loaded configuration document.
///
/// The `paths` section has been replaced with the resolved group: in flat
/// mode every non-exempt fragment is expanded to an absolute path, and in
/// both modes every eligible entry existed on disk at load time. The rest
/// of the document is carried as-is; the forecast computation reads its
/// own sections through the accessors below.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    document: Mapping,
    paths: PathGroup,
}

#[allow(dead_code)]
impl ResolvedConfig {
    /// The resolved, validated path group.
    pub fn paths(&self) -> &PathGroup {
        &self.paths
    }

    /// Raw access to a top-level section of the document.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Decode a top-level section into a typed value.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key).cloned().unwrap_or(Value::Null);
        serde_yaml::from_value(value).map_err(|e| {
            SeasonalError::ConfigParse(format!("failed to decode '{}' section: {}", key, e))
        })
    }

    /// Consume into the underlying document, resolved `paths` included.
    pub fn into_value(self) -> Value {
        Value::Mapping(self.document)
    }
}

/// Load a configuration document and resolve its `paths` section.
///
/// Reads and parses the file, resolves the active path group according to
/// `mode`, validates it, and returns the document with `paths` replaced by
/// the resolved group. Any failure aborts the load; there is no partial
/// result. Each call re-reads the file and re-validates from scratch.
pub fn load_config<P: AsRef<Path>>(path: P, mode: PathsMode) -> Result<ResolvedConfig> {
    let path = path.as_ref();
    println!("loading config file '{}'", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| SeasonalError::ConfigRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let document: Value = serde_yaml::from_str(&content)
        .map_err(|e| SeasonalError::ConfigParse(format!("failed to parse config YAML: {}", e)))?;
    let Value::Mapping(mut document) = document else {
        return Err(SeasonalError::ConfigParse(
            "config document must be a non-empty YAML mapping".to_string(),
        ));
    };

    let paths_value = document
        .get(PATHS_KEY)
        .ok_or(SeasonalError::MissingPathsSection)?;

    let paths = match mode {
        PathsMode::Flat { base_override } => {
            let mut group = PathGroup::from_value(paths_value)?;
            let base_dir = group.base_dir(base_override.as_deref());
            group.expand(&base_dir);
            group
        }
        PathsMode::Store { name } => select_store(paths_value, name.as_deref())?,
    };

    paths.validate()?;

    document.insert(Value::String(PATHS_KEY.to_string()), paths.to_value());

    Ok(ResolvedConfig { document, paths })
}

/// Pick the named store's group out of a store-keyed `paths` mapping.
///
/// Store groups are assumed to carry absolute paths already; no fragment
/// expansion is applied to the selected group.
fn select_store(paths_value: &Value, name: Option<&str>) -> Result<PathGroup> {
    let stores = paths_value.as_mapping().ok_or_else(|| {
        SeasonalError::ConfigParse(
            "'paths' must map store identifiers to path groups".to_string(),
        )
    })?;

    let name = name.unwrap_or(DEFAULT_STORE);
    let group = stores.get(name).ok_or_else(|| SeasonalError::UnknownStore {
        name: name.to_string(),
        known: stores
            .keys()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    })?;

    PathGroup::from_value(group)
}
