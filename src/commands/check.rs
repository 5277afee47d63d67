//! Implementation of the `seasonal check` command.
//!
//! Loads a configuration file, resolves its `paths` section, and reports
//! a one-line summary. Does not change any state.

use crate::cli::CheckArgs;
use crate::config::{self, PathsMode};
use crate::error::Result;

/// Execute the `seasonal check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let mode = if args.store_paths {
        PathsMode::store_from_env()
    } else {
        PathsMode::flat_from_env()
    };

    let config = config::load_config(&args.config, mode)?;

    println!("config OK: {} path entries resolved", config.paths().len());

    Ok(())
}
