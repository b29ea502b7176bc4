//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod bounds;
mod category;
mod geometry;
mod paint;
mod priority;

pub use bounds::{FitPadding, GeoBounds, LatLng};
pub use category::LayerCategory;
pub use geometry::GeometryKind;
pub use paint::{IconSpec, MarkerShape, StyleSpec};
pub use priority::ZPriority;
