//! Configuration loading for the seasonal pipeline.
//!
//! A config file is a YAML document with a mandatory `paths` section.
//! Depending on the deployment, `paths` either holds the active path group
//! directly (flat mode) or maps store identifiers to per-store groups
//! (store-selection mode). Loading resolves the active group, expands
//! relative path fragments against a base directory in flat mode, and
//! verifies that every eligible entry exists on disk before the rest of
//! the pipeline runs.
//!
//! Flat mode:
//!
//! ```yaml
//! models: ['ecmwf', 'cmcc']
//! paths:
//!   home: '/data/pticlima'
//!   path_gcm_base: '/DATA/SEASONAL'
//!   dir_results: '/Results'
//!   output_filename: 'forecast.nc'
//! ```
//!
//! Store-selection mode:
//!
//! ```yaml
//! paths:
//!   lustre:
//!     home: '/mnt/lustre/seasonal'
//!   pticlima:
//!     home: '/data/pticlima'
//! ```

mod expand;
mod loader;
mod types;
mod validate;


// Re-export public API
pub use loader::{ResolvedConfig, load_config};
pub use types::{BASE_DIR_ENV, DEFAULT_STORE, PathGroup, PathsMode, STORE_ENV};
