//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{
    MAX_DECIMAL_PLACES, MAX_SIDE_LENGTH, MIN_DECIMAL_PLACES, MIN_SIDE_LENGTH,
};

/// Domain errors represent violations of triangle geometry rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("not a well-formed number: {input:?}")]
    MalformedNumber { input: String },

    #[error("side length {value} not within [{min}, {max}]", min = MIN_SIDE_LENGTH, max = MAX_SIDE_LENGTH)]
    SideOutOfRange { value: f64 },

    #[error("decimal places {value} not within [{min}, {max}]", min = MIN_DECIMAL_PLACES, max = MAX_DECIMAL_PLACES)]
    DecimalPlacesOutOfRange { value: i64 },

    #[error("triangle with sides a={a}, b={b}, c={c} doesn't exist")]
    DegenerateTriangle { a: f64, b: f64, c: f64 },
}
