//! Command implementations for seasonal.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod tercile;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Tercile(args) => tercile::cmd_tercile(args),
    }
}
