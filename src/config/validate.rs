//! Existence validation for resolved path groups.

use std::path::Path;

use super::types::{FILENAME_MARKER, HOME_KEY, PathGroup};
use crate::error::{Result, SeasonalError};

impl PathGroup {
    /// Verify that every eligible entry points at an existing file or
    /// directory.
    ///
    /// Filename entries are never checked, and an empty `home` means no
    /// base directory is configured. The first missing entry in document
    /// order fails the whole group; an empty group trivially passes.
    pub fn validate(&self) -> Result<()> {
        for (key, path) in self.iter() {
            if key.contains(FILENAME_MARKER) {
                continue;
            }

            if key == HOME_KEY && path.is_empty() {
                continue;
            }

            if !Path::new(path).exists() {
                return Err(SeasonalError::PathNotFound {
                    key: key.to_string(),
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }
}
