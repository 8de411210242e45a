//! Process exit codes (BSD sysexits.h compatible).

/// Successful termination.
pub const OK: i32 = 0;

/// Command line usage error, as reported by clap.
pub const USAGE: i32 = 2;

/// Local input rejected before any request.
pub const DATAERR: i32 = 65;

/// Addressed resource does not exist on the service.
pub const NOINPUT: i32 = 66;

/// Service unreachable or returned a failure status.
pub const UNAVAILABLE: i32 = 69;

/// Could not write output.
pub const IOERR: i32 = 74;

/// Missing or invalid configuration.
pub const CONFIG: i32 = 78;
