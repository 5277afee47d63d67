//! Error types for the seasonal CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for seasonal operations.
///
/// Every failure during config loading propagates to the caller as one of
/// these variants; there is no local recovery and no partial configuration
/// returned on failure.
#[derive(Error, Debug)]
pub enum SeasonalError {
    /// The config file itself could not be read.
    #[error("failed to read config file '{path}': {reason}")]
    ConfigRead { path: String, reason: String },

    /// The config document is not valid YAML or has the wrong shape.
    #[error("{0}")]
    ConfigParse(String),

    /// The config document has no `paths` section.
    #[error("config file has no 'paths' section")]
    MissingPathsSection,

    /// Store-selection mode named a store that is not configured.
    #[error("unknown store identifier '{name}' (known stores: {known})")]
    UnknownStore { name: String, known: String },

    /// A resolved path entry does not exist on disk.
    #[error("path for '{key}' does not exist: '{path}'")]
    PathNotFound { key: String, path: String },

    /// Command is not yet implemented.
    #[error("{0} is not yet implemented")]
    NotImplemented(String),
}

impl SeasonalError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SeasonalError::ConfigRead { .. } => exit_codes::USER_ERROR,
            SeasonalError::ConfigParse(_) => exit_codes::USER_ERROR,
            SeasonalError::MissingPathsSection => exit_codes::USER_ERROR,
            SeasonalError::UnknownStore { .. } => exit_codes::USER_ERROR,
            SeasonalError::PathNotFound { .. } => exit_codes::VALIDATION_FAILURE,
            SeasonalError::NotImplemented(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for seasonal operations.
pub type Result<T> = std::result::Result<T, SeasonalError>;
