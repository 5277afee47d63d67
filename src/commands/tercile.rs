//! Implementation of the `seasonal tercile` command.
//!
//! Resolves the configuration for the requested initialization date.
//! The forecast computation itself is pending; the command fails with a
//! NotImplemented error after the configuration has been validated.

use chrono::{Datelike, Local};

use crate::cli::TercileArgs;
use crate::config::{self, PathsMode};
use crate::error::{Result, SeasonalError};

/// Execute the `seasonal tercile` command.
pub fn cmd_tercile(args: TercileArgs) -> Result<()> {
    let mode = if args.store_paths {
        PathsMode::store_from_env()
    } else {
        PathsMode::flat_from_env()
    };

    let config = config::load_config(&args.config, mode)?;

    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    println!(
        "tercile forecast for {:04}-{:02} ({} path entries resolved)",
        year,
        month,
        config.paths().len()
    );

    Err(SeasonalError::NotImplemented("seasonal tercile".to_string()))
}
