//! All regular polygons with 3..=m edges sharing one circumradius.
//!
//! Purpose
//! - Generate the sequence once, eagerly, in ascending edge count.
//! - Pick the polygon with the best area/perimeter ratio (`efficiency`).
//!
//! Tie-break
//! - The scan keeps the first polygon whose ratio is strictly greater than the current
//!   best. Ratios equal to the best never replace it, so the smallest edge count wins.
//!   With the rounded apothem, ties between neighbours are common for large `m`.

use std::fmt;
use std::ops::Index;

use crate::cfg::{MAX_EDGES_LIMIT, MIN_EDGES};
use crate::error::PolygonError;
use crate::regular::{validate_circumradius, RegularPolygon};

/// Immutable sequence of regular polygons, `polygons[i].edge_count() == i + 3`.
///
/// Invariants:
/// - `polygons.len() == max_edges - 2` (never empty).
/// - Every polygon shares `circumradius`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonCollection {
    max_edges: u32,
    circumradius: f64,
    polygons: Vec<RegularPolygon>,
}

impl PolygonCollection {
    pub fn new(max_edges: u32, circumradius: f64) -> Result<Self, PolygonError> {
        if max_edges < MIN_EDGES {
            return Err(PolygonError::invalid(format!(
                "PolygonCollection needs max_edges >= {MIN_EDGES}, got {max_edges}"
            )));
        }
        if max_edges > MAX_EDGES_LIMIT {
            return Err(PolygonError::invalid(format!(
                "max_edges must be <= {MAX_EDGES_LIMIT}, got {max_edges}"
            )));
        }
        validate_circumradius(circumradius)?;
        let polygons = (MIN_EDGES..=max_edges)
            .map(|n| RegularPolygon::new(n, circumradius))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            max_edges,
            circumradius,
            len = polygons.len(),
            "collection built"
        );
        Ok(Self {
            max_edges,
            circumradius,
            polygons,
        })
    }

    #[inline]
    pub fn max_edges(&self) -> u32 {
        self.max_edges
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The full sequence, ascending by edge count.
    #[inline]
    pub fn details(&self) -> &[RegularPolygon] {
        &self.polygons
    }

    pub fn get(&self, index: usize) -> Result<&RegularPolygon, PolygonError> {
        self.polygons
            .get(index)
            .ok_or_else(|| PolygonError::out_of_range(index, self.polygons.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegularPolygon> {
        self.polygons.iter()
    }

    /// Polygon with the largest `ratio`; the smallest edge count on ties.
    pub fn efficiency(&self) -> &RegularPolygon {
        // Non-empty by construction: max_edges >= 3.
        let best = most_efficient(&self.polygons).unwrap_or(&self.polygons[0]);
        tracing::debug!(
            edges = best.edge_count(),
            ratio = best.ratio(),
            "most efficient polygon"
        );
        best
    }
}

/// Linear scan for the maximum `ratio`, keeping the earliest polygon on ties.
///
/// Returns `None` only for an empty input.
pub fn most_efficient<'a, I>(polygons: I) -> Option<&'a RegularPolygon>
where
    I: IntoIterator<Item = &'a RegularPolygon>,
{
    let mut iter = polygons.into_iter();
    let first = iter.next()?;
    let mut best = (first, first.ratio());
    for p in iter {
        let r = p.ratio();
        if r > best.1 {
            best = (p, r);
        }
    }
    Some(best.0)
}

impl Index<usize> for PolygonCollection {
    type Output = RegularPolygon;

    fn index(&self, index: usize) -> &Self::Output {
        &self.polygons[index]
    }
}

impl<'a> IntoIterator for &'a PolygonCollection {
    type Item = &'a RegularPolygon;
    type IntoIter = std::slice::Iter<'a, RegularPolygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl fmt::Display for PolygonCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonCollection(max_edges={}, circumradius={})",
            self.max_edges, self.circumradius
        )
    }
}
