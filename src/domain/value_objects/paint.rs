//! Paint value objects produced by the styling collaborator

use serde::Serialize;

/// Path styling for line and polygon features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSpec {
    pub stroke_color: String,
    pub fill_color: String,
    pub weight: u32,
    pub opacity: f32,
    pub fill_opacity: f32,
    pub dash_array: Option<String>,
}

/// Marker shape used for a point feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum MarkerShape {
    /// Icon glyph drawn inside a square box of `size` pixels.
    Glyph { glyph: String, size: u32 },
    /// Plain circle marker.
    Circle { radius: u32 },
}

/// Marker styling for point features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconSpec {
    pub class_name: String,
    pub shape: MarkerShape,
    pub fill_color: String,
}
