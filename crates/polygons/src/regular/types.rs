//! Core polygon type: validated `(n, R)` pair with positional access and vertices.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::MIN_EDGES;
use crate::error::PolygonError;

/// Regular polygon with `edges` vertices on a circle of radius `circumradius`.
///
/// Invariants:
/// - `edges >= 3`.
/// - `circumradius` is finite and `>= 0`.
/// - Both fields are fixed after `new`; derived measures are recomputed on access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon {
    edges: u32,
    circumradius: f64,
}

/// One of the two defining values, as returned by `RegularPolygon::get`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Component {
    EdgeCount(u32),
    Circumradius(f64),
}

pub(crate) fn validate_circumradius(circumradius: f64) -> Result<(), PolygonError> {
    if !circumradius.is_finite() {
        return Err(PolygonError::invalid(format!(
            "circumradius must be finite, got {circumradius}"
        )));
    }
    if circumradius < 0.0 {
        return Err(PolygonError::invalid(format!(
            "circumradius must be >= 0, got {circumradius}"
        )));
    }
    Ok(())
}

impl RegularPolygon {
    pub fn new(edges: u32, circumradius: f64) -> Result<Self, PolygonError> {
        if edges < MIN_EDGES {
            return Err(PolygonError::invalid(format!(
                "RegularPolygon must have at least {MIN_EDGES} edges, got {edges}"
            )));
        }
        validate_circumradius(circumradius)?;
        Ok(Self {
            edges,
            circumradius,
        })
    }

    #[inline]
    pub fn edge_count(&self) -> u32 {
        self.edges
    }

    /// Same as `edge_count`; a polygon has as many vertices as edges.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.edges
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// The defining pair `(edge_count, circumradius)`.
    #[inline]
    pub fn as_pair(&self) -> (u32, f64) {
        (self.edges, self.circumradius)
    }

    /// Positional access into `as_pair()`: 0 → edge count, 1 → circumradius.
    pub fn get(&self, index: usize) -> Result<Component, PolygonError> {
        match index {
            0 => Ok(Component::EdgeCount(self.edges)),
            1 => Ok(Component::Circumradius(self.circumradius)),
            _ => Err(PolygonError::out_of_range(index, 2)),
        }
    }

    /// Vertices on the circumcircle, counterclockwise from angle 0.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let mut verts = Vec::with_capacity(self.edges as usize);
        let angle_step = 2.0 * std::f64::consts::PI / self.edges as f64;
        for i in 0..self.edges {
            let theta = angle_step * i as f64;
            verts.push(Vector2::new(
                self.circumradius * theta.cos(),
                self.circumradius * theta.sin(),
            ));
        }
        verts
    }
}

impl fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegularPolygon(edges={}, circumradius={})",
            self.edges, self.circumradius
        )
    }
}
