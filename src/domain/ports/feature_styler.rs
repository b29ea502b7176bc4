//! FeatureStyler port
//!
//! Maps a feature-level type tag to path styling and marker icons. Implementations
//! are pure and total: an unknown or missing tag yields the default style.

use crate::domain::value_objects::{IconSpec, StyleSpec};

pub trait FeatureStyler: Send + Sync {
    fn style_for(&self, type_tag: Option<&str>) -> StyleSpec;
    fn icon_for(&self, type_tag: Option<&str>) -> IconSpec;
}
