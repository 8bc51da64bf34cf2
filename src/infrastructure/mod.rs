//! Infrastructure layer: I/O implementations
//!
//! This layer implements the I/O boundary traits the session depends on.

pub mod traits;
