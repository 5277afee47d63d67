//! Exit code constants for the seasonal CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable or malformed config, unknown store,
//!   unimplemented command)
//! - 2: Validation failure (a configured path does not exist on disk)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable or malformed config, unknown store identifier,
/// or an unimplemented command.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a resolved path entry does not exist on disk.
pub const VALIDATION_FAILURE: i32 = 2;
