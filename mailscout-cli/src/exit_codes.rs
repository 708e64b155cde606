//! Exit codes used by the mailscout CLI.

/// Command completed successfully.
pub const EXIT_SUCCESS: i32 = 0;

/// Command completed but something noteworthy happened (e.g. the server
/// stopped on a transport error after starting cleanly).
pub const EXIT_WARNING: i32 = 1;

/// Command failed.
pub const EXIT_ERROR: i32 = 2;
