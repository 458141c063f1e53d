//! Regular polygon measures and efficiency selection.
//!
//! Two value types carry the whole crate:
//! - `RegularPolygon`: edge count + circumradius, every other measure derived on demand.
//! - `PolygonCollection`: all regular polygons with 3..=m edges sharing one circumradius,
//!   plus the pick with the best area/perimeter ratio.
//!
//! API Policy
//! - Constructors validate and return `Result<_, PolygonError>`; accessors never fail.
//! - Fallible positional/dynamic access (`get`, `try_eq`, `try_gt`) sits next to the
//!   infallible trait impls (`Index`, `PartialEq`, `PartialOrd`).

pub mod cfg;
pub mod collection;
pub mod error;
pub mod regular;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collection::{most_efficient, PolygonCollection};
pub use error::PolygonError;
pub use nalgebra::Vector2 as Vec2;
pub use regular::{Component, RegularPolygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collection::{most_efficient, PolygonCollection};
    pub use crate::error::PolygonError;
    pub use crate::regular::{Component, RegularPolygon};
    pub use nalgebra::Vector2 as Vec2;
}
