//! Ordering by edge count and dynamically typed comparisons.

use std::any::Any;
use std::cmp::Ordering;

use super::types::RegularPolygon;
use crate::error::PolygonError;

/// Orders by edge count. Same edge count with a different circumradius is unordered,
/// so `partial_cmp == Some(Equal)` exactly when `==` holds.
impl PartialOrd for RegularPolygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edge_count().cmp(&other.edge_count()) {
            Ordering::Equal if self.circumradius() == other.circumradius() => {
                Some(Ordering::Equal)
            }
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

fn expect_polygon(other: &dyn Any) -> Result<&RegularPolygon, PolygonError> {
    other
        .downcast_ref::<RegularPolygon>()
        .ok_or(PolygonError::TypeMismatch {
            expected: "RegularPolygon",
        })
}

impl RegularPolygon {
    /// Equality against an arbitrary value; `TypeMismatch` unless it is a `RegularPolygon`.
    ///
    /// A boxed operand is compared through its contents: pass `boxed.as_ref()`.
    pub fn try_eq(&self, other: &dyn Any) -> Result<bool, PolygonError> {
        Ok(self == expect_polygon(other)?)
    }

    /// `self` has strictly more edges than `other`; `TypeMismatch` unless it is a `RegularPolygon`.
    pub fn try_gt(&self, other: &dyn Any) -> Result<bool, PolygonError> {
        Ok(self.edge_count() > expect_polygon(other)?.edge_count())
    }
}
