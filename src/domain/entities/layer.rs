//! Layer descriptor entity
//!
//! A layer is one named overlay sourced from one geographic document. It belongs to
//! exactly one location and one category.

use serde::Serialize;

use crate::domain::value_objects::{GeometryKind, LayerCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerDescriptor {
    /// Unique display name, also the registry key.
    pub name: String,
    pub location_key: String,
    pub category: LayerCategory,
    /// Dominant geometry. `None` for mixed layers, which fall back to the
    /// category's default draw tier.
    pub geometry: Option<GeometryKind>,
    pub source_path: String,
}

impl LayerDescriptor {
    pub fn new(
        name: impl Into<String>,
        location_key: impl Into<String>,
        category: LayerCategory,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location_key: location_key.into(),
            category,
            geometry: None,
            source_path: source_path.into(),
        }
    }

    pub fn with_geometry(mut self, geometry: GeometryKind) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn belongs_to(&self, location_key: &str) -> bool {
        self.location_key == location_key
    }
}
