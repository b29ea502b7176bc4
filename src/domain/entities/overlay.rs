//! Overlay entity
//!
//! A drawable object built from one layer's document. The engine attaches and
//! detaches overlays by layer name; the overlay itself remembers the z-priority it
//! was last given so a later re-attach keeps its established stacking.

use serde::Serialize;

use crate::domain::value_objects::{GeoBounds, GeometryKind, IconSpec, StyleSpec, ZPriority};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "style")]
pub enum Paint {
    Path(StyleSpec),
    Marker(IconSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledFeature {
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_tag: Option<String>,
    pub geometry: Option<GeometryKind>,
    pub bounds: Option<GeoBounds>,
    /// `None` for features without geometry.
    pub paint: Option<Paint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    layer: String,
    features: Vec<StyledFeature>,
    bounds: Option<GeoBounds>,
    z_priority: Option<ZPriority>,
}

impl Overlay {
    pub fn new(layer: impl Into<String>, features: Vec<StyledFeature>) -> Self {
        let bounds = features
            .iter()
            .filter_map(|f| f.bounds)
            .reduce(|acc, b| acc.union(&b));
        Self {
            layer: layer.into(),
            features,
            bounds,
            z_priority: None,
        }
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn features(&self) -> &[StyledFeature] {
        &self.features
    }

    /// Own bounding box, `None` when nothing in the overlay is bound-able.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    pub fn z_priority(&self) -> Option<ZPriority> {
        self.z_priority
    }

    pub fn set_z_priority(&mut self, priority: ZPriority) {
        self.z_priority = Some(priority);
    }
}
