//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod entities;
pub mod error;
pub mod format;
pub mod geometry;

pub use entities::*;
pub use error::DomainError;
