//! Closed-form measures of a regular polygon.
//!
//! With `n` edges and circumradius `R`:
//! - interior angle `180 (n - 2) / n` degrees
//! - edge length `s = 2 R sin(π/n)`
//! - apothem `a = round(R cos(π/n), 2)`
//! - area `n s a / 2`, perimeter `n s`, ratio `area / perimeter`

use std::f64::consts::PI;

use super::types::RegularPolygon;
use crate::cfg::APOTHEM_DECIMALS;

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl RegularPolygon {
    /// Interior angle in degrees; strictly inside (0, 180).
    pub fn interior_angle(&self) -> f64 {
        let n = self.edge_count() as u64;
        (180 * (n - 2)) as f64 / n as f64
    }

    pub fn edge_length(&self) -> f64 {
        2.0 * self.circumradius() * (PI / self.edge_count() as f64).sin()
    }

    /// Center-to-edge distance, rounded to `APOTHEM_DECIMALS` places.
    pub fn apothem(&self) -> f64 {
        let exact = self.circumradius() * (PI / self.edge_count() as f64).cos();
        round_to(exact, APOTHEM_DECIMALS)
    }

    /// Area from the rounded apothem.
    pub fn area(&self) -> f64 {
        self.edge_count() as f64 * self.edge_length() * self.apothem() / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.edge_count() as f64 * self.edge_length()
    }

    /// `area / perimeter`; `0.0` for a degenerate (zero-radius) polygon.
    pub fn ratio(&self) -> f64 {
        let perimeter = self.perimeter();
        if perimeter == 0.0 {
            return 0.0;
        }
        self.area() / perimeter
    }

    /// Multi-line summary of every measure.
    pub fn details(&self) -> String {
        format!(
            "RegularPolygon(edges(n)={},\n    \
             vertices(n)={},\n    \
             circumradius(R)={},\n    \
             interior_angle={},\n    \
             edge_length(s)={},\n    \
             apothem(a)={},\n    \
             area(A)={},\n    \
             perimeter(P)={})",
            self.edge_count(),
            self.vertex_count(),
            self.circumradius(),
            self.interior_angle(),
            self.edge_length(),
            self.apothem(),
            self.area(),
            self.perimeter(),
        )
    }
}
