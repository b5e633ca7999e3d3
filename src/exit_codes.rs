//! Exit code constants for the mailpatch CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, bad config)
//! - 2: At least one body was not a clean patch (written as `.warning.patch`)
//! - 3: A mail message could not be parsed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Recognition failure: a body was not a well-formed patch.
pub const RECOGNITION_WARNING: i32 = 2;

/// Mail failure: the message could not be parsed or has no text body.
pub const MAIL_FAILURE: i32 = 3;
