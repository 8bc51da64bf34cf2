//! Closed-form triangle measurements
//!
//! All functions are pure and total over a validated [`Triangle`];
//! none of them re-checks the triangle inequality.

use crate::domain::entities::{Side, Triangle};

/// Sum of all three sides.
pub fn perimeter(triangle: &Triangle) -> f64 {
    let [a, b, c] = triangle.sides();
    a + b + c
}

/// Half the perimeter, the `s` in Heron's formula.
pub fn semiperimeter(triangle: &Triangle) -> f64 {
    perimeter(triangle) / 2.0
}

/// Area via Heron's formula, `sqrt(s(s-a)(s-b)(s-c))`.
pub fn area(triangle: &Triangle) -> f64 {
    let [a, b, c] = triangle.sides();
    let s = semiperimeter(triangle);
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Altitude dropped onto the named side.
pub fn height(triangle: &Triangle, side: Side) -> f64 {
    2.0 * area(triangle) / triangle.side(side)
}

/// Median drawn to the midpoint of the named side.
pub fn median(triangle: &Triangle, side: Side) -> f64 {
    let (x, y) = triangle.other_sides(side);
    let z = triangle.side(side);
    0.5 * (2.0 * x * x + 2.0 * y * y - z * z).sqrt()
}

/// Interior angle bisector drawn to the named side.
pub fn bisector(triangle: &Triangle, side: Side) -> f64 {
    let (x, y) = triangle.other_sides(side);
    let z = triangle.side(side);
    let s = semiperimeter(triangle);
    2.0 / (x + y) * (x * y * s * (s - z)).sqrt()
}
