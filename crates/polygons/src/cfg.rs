//! Numeric policy constants.
//!
//! Policy
//! - Fixed constants rather than a runtime config; the measures are closed-form and
//!   the only knobs are the apothem precision and the collection size ceiling.

/// Decimal places kept by `RegularPolygon::apothem`. Area is computed from the rounded value.
pub const APOTHEM_DECIMALS: i32 = 2;

/// Largest `max_edges` accepted by `PolygonCollection::new`.
pub const MAX_EDGES_LIMIT: u32 = 1_000_000;

/// Smallest edge count of a polygon.
pub const MIN_EDGES: u32 = 3;
