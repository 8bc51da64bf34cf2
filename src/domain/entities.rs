//! Domain entities: core data structures

use crate::domain::error::DomainError;
use crate::domain::geometry;

/// Shortest accepted side length.
pub const MIN_SIDE_LENGTH: f64 = 0.001;

/// Longest accepted side length.
pub const MAX_SIDE_LENGTH: f64 = 1000.0;

/// Fewest decimal places a report may use.
pub const MIN_DECIMAL_PLACES: u8 = 0;

/// Most decimal places a report may use.
pub const MAX_DECIMAL_PLACES: u8 = 12;

/// One of the three sides of a triangle.
///
/// A closed variant instead of a raw index, so a match over sides is
/// checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    /// All sides, in prompt and report order.
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];

    /// Lowercase letter used in prompts and report labels.
    pub fn label(self) -> char {
        match self {
            Side::A => 'a',
            Side::B => 'b',
            Side::C => 'c',
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
            Side::C => 2,
        }
    }
}

/// A validated triangle.
///
/// Construction enforces the side-length bounds and the strict triangle
/// inequality, so every instance is geometrically sound. Immutable once
/// built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Build a triangle from three side lengths.
    ///
    /// Each side must lie within the accepted bounds, and each side must
    /// be strictly shorter than the sum of the other two.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, DomainError> {
        for value in [a, b, c] {
            check_side_length(value)?;
        }
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(DomainError::DegenerateTriangle { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Length of the named side.
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    /// Lengths of the two sides other than the named one.
    pub fn other_sides(&self, side: Side) -> (f64, f64) {
        match side {
            Side::A => (self.b, self.c),
            Side::B => (self.a, self.c),
            Side::C => (self.a, self.b),
        }
    }

    /// All three side lengths, in side order.
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Validate a single side length against the accepted bounds.
///
/// The inclusive-range check also rejects NaN and infinities.
pub fn check_side_length(value: f64) -> Result<f64, DomainError> {
    if !(MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&value) {
        return Err(DomainError::SideOutOfRange { value });
    }
    Ok(value)
}

/// Parse a side length from one line of input.
///
/// Leading whitespace is tolerated. Anything trailing the number makes
/// the whole line malformed, so "12abc" is rejected rather than read
/// as 12.
pub fn parse_side_length(line: &str) -> Result<f64, DomainError> {
    let value = line
        .trim_start()
        .parse::<f64>()
        .map_err(|_| DomainError::MalformedNumber {
            input: line.to_string(),
        })?;
    check_side_length(value)
}

/// Number of decimal places shown in the report.
///
/// Display-only: the count never feeds back into any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    /// Accept a count within the configured bounds.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(i64::from(MIN_DECIMAL_PLACES)..=i64::from(MAX_DECIMAL_PLACES)).contains(&value) {
            return Err(DomainError::DecimalPlacesOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Parse a count from one line of input.
    ///
    /// Fractional input such as "2.5" is malformed, not out of range.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let value = line
            .trim_start()
            .parse::<i64>()
            .map_err(|_| DomainError::MalformedNumber {
                input: line.to_string(),
            })?;
        Self::new(value)
    }

    /// The count as a formatting precision.
    pub fn count(self) -> usize {
        usize::from(self.0)
    }

    /// The count as a power-of-ten exponent.
    pub fn exponent(self) -> i32 {
        i32::from(self.0)
    }
}

/// Every measurement derived from one triangle.
///
/// Computed once, read-only thereafter. The per-side values are looked
/// up through [`Side`], never through a bare index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    perimeter: f64,
    semiperimeter: f64,
    area: f64,
    heights: [f64; 3],
    medians: [f64; 3],
    bisectors: [f64; 3],
}

impl DerivedMetrics {
    /// Compute all metrics for a validated triangle.
    pub fn compute(triangle: &Triangle) -> Self {
        Self {
            perimeter: geometry::perimeter(triangle),
            semiperimeter: geometry::semiperimeter(triangle),
            area: geometry::area(triangle),
            heights: Side::ALL.map(|side| geometry::height(triangle, side)),
            medians: Side::ALL.map(|side| geometry::median(triangle, side)),
            bisectors: Side::ALL.map(|side| geometry::bisector(triangle, side)),
        }
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn semiperimeter(&self) -> f64 {
        self.semiperimeter
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Altitude to the named side.
    pub fn height(&self, side: Side) -> f64 {
        self.heights[side.index()]
    }

    /// Median to the midpoint of the named side.
    pub fn median(&self, side: Side) -> f64 {
        self.medians[side.index()]
    }

    /// Angle bisector to the named side.
    pub fn bisector(&self, side: Side) -> f64 {
        self.bisectors[side.index()]
    }
}
