//! Overlay renderer
//!
//! Turns a parsed document into a drawable overlay: lines and polygons get path
//! styling, points get a marker icon, both keyed by the feature's type tag.

use crate::domain::entities::{GeoDocument, Overlay, Paint, StyledFeature};
use crate::domain::ports::FeatureStyler;
use crate::domain::value_objects::GeometryKind;

pub fn render_overlay(layer: &str, document: &GeoDocument, styler: &dyn FeatureStyler) -> Overlay {
    let features = document
        .features()
        .iter()
        .map(|feature| {
            if feature.name().is_none() {
                tracing::debug!(layer, "feature without a name");
            }
            let type_tag = feature.type_tag();
            let geometry = feature.geometry.as_ref();
            let kind = geometry.and_then(|g| g.kind());
            let paint = geometry.map(|_| match kind {
                Some(GeometryKind::Point) => Paint::Marker(styler.icon_for(type_tag)),
                _ => Paint::Path(styler.style_for(type_tag)),
            });

            StyledFeature {
                name: feature.name().map(str::to_string),
                description: feature.description().map(str::to_string),
                type_tag: type_tag.map(str::to_string),
                geometry: kind,
                bounds: feature.bounds(),
                paint,
            }
        })
        .collect();

    Overlay::new(layer, features)
}
