//! MapSurface port
//!
//! The map the engine drives. Attachment bookkeeping lives in the engine; the
//! surface only receives the resulting side effects.

use serde::Serialize;

use crate::domain::entities::Overlay;
use crate::domain::value_objects::{FitPadding, GeoBounds, ZPriority};

pub trait MapSurface {
    /// Add an overlay to the map. The overlay's current z-priority, if any, applies.
    fn attach(&mut self, overlay: &Overlay);

    fn detach(&mut self, layer: &str);

    fn set_z_priority(&mut self, layer: &str, priority: ZPriority);

    /// Animate the viewport to `bounds`, inset by `padding`.
    fn fit_bounds(&mut self, bounds: GeoBounds, padding: FitPadding);
}

/// Side effect observed on a map surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MapEvent {
    Attached {
        layer: String,
        z_priority: Option<ZPriority>,
    },
    Detached {
        layer: String,
    },
    ZPriority {
        layer: String,
        z_priority: ZPriority,
    },
    FitBounds {
        bounds: GeoBounds,
        padding: FitPadding,
    },
}
