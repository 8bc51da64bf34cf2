//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Data format error (sides that cannot form a triangle)
pub const DATAERR: i32 = 65;

/// Cannot open input (stdin closed mid-dialogue)
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;
