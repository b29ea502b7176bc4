//! Domain Entities
//!
//! - `LayerDescriptor` - one catalog row (name, location, category, source)
//! - `LayerCatalog` - the static table of all descriptors
//! - `GeoDocument` - a parsed GeoJSON FeatureCollection
//! - `Overlay` - a styled, drawable document attached to the map by name

mod catalog;
mod document;
mod layer;
mod overlay;

pub use catalog::{CatalogError, LayerCatalog};
pub use document::{DocumentError, Feature, GeoDocument, Geometry};
pub use layer::LayerDescriptor;
pub use overlay::{Overlay, Paint, StyledFeature};
