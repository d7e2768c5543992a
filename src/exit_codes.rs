//! Exit code constants for the promptpalette CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unknown host API)
//! - 2: I/O failure (unreadable input, stdout write failure)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or an unrecognized host API value.
pub const USER_ERROR: i32 = 1;

/// I/O failure: input file or stdin could not be read, or output could not be written.
pub const IO_FAILURE: i32 = 2;
