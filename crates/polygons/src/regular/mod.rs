//! Regular polygons described by edge count and circumradius.
//!
//! Purpose
//! - `RegularPolygon` stores only `(n, R)`; interior angle, edge length, apothem,
//!   area, perimeter and ratio are closed-form functions of those two values.
//! - Comparisons follow edge count; equality is exact on both fields.
//!
//! Conventions
//! - Angles in degrees for `interior_angle`, radians everywhere else.
//! - The apothem is rounded to `cfg::APOTHEM_DECIMALS` places and the area is built
//!   from the rounded value, so `ratio == apothem / 2` up to float rounding.
//!
//! Code cross-refs: `collection::PolygonCollection`, `error::PolygonError`

mod compare;
mod measures;
mod types;

pub use measures::round_to;
pub use types::{Component, RegularPolygon};

pub(crate) use types::validate_circumradius;

#[cfg(test)]
mod tests;
