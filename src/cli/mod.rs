//! CLI argument parsing for seasonal.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seasonal: tercile probability forecasts from seasonal hindcast data.
///
/// Commands are driven by a YAML configuration file whose `paths` section
/// is resolved and existence-checked before any computation starts.
#[derive(Parser, Debug)]
#[command(name = "seasonal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for seasonal.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a configuration file.
    ///
    /// Loads the file, resolves the `paths` section, and verifies that
    /// every eligible path exists on disk. Fails on the first missing path.
    Check(CheckArgs),

    /// Compute tercile probability forecasts for one initialization date.
    ///
    /// Loads and validates the configuration, then runs the forecast
    /// computation for the given year and month.
    Tercile(TercileArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the YAML configuration file.
    pub config: PathBuf,

    /// Treat `paths` as per-store groups and select one via DATA_STORE.
    #[arg(long)]
    pub store_paths: bool,
}

/// Arguments for the `tercile` command.
#[derive(Parser, Debug)]
pub struct TercileArgs {
    /// Path to the YAML configuration file.
    pub config: PathBuf,

    /// Initialization year (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Initialization month, 1-12 (defaults to the current month).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Treat `paths` as per-store groups and select one via DATA_STORE.
    #[arg(long)]
    pub store_paths: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
