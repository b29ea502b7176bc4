//! Recording map surface
//!
//! In-memory [`MapSurface`] that keeps the current attachment and viewport and an
//! ordered log of every side effect. Backs the `run` command and engine tests.

use std::collections::BTreeMap;

use crate::domain::entities::Overlay;
use crate::domain::ports::{MapEvent, MapSurface};
use crate::domain::value_objects::{FitPadding, GeoBounds, ZPriority};

#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    events: Vec<MapEvent>,
    layers: BTreeMap<String, Option<ZPriority>>,
    viewport: Option<GeoBounds>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MapEvent] {
        &self.events
    }

    /// Drain the event log, keeping map state.
    pub fn take_events(&mut self) -> Vec<MapEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn viewport(&self) -> Option<GeoBounds> {
        self.viewport
    }

    pub fn fit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MapEvent::FitBounds { .. }))
            .count()
    }

    pub fn has_layer(&self, layer: &str) -> bool {
        self.layers.contains_key(layer)
    }

    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Effective z-priority of an attached layer, `None` if detached or unset.
    pub fn z_priority_of(&self, layer: &str) -> Option<ZPriority> {
        self.layers.get(layer).copied().flatten()
    }
}

impl MapSurface for RecordingMap {
    fn attach(&mut self, overlay: &Overlay) {
        let layer = overlay.layer().to_string();
        self.layers.insert(layer.clone(), overlay.z_priority());
        self.events.push(MapEvent::Attached {
            layer,
            z_priority: overlay.z_priority(),
        });
    }

    fn detach(&mut self, layer: &str) {
        self.layers.remove(layer);
        self.events.push(MapEvent::Detached {
            layer: layer.to_string(),
        });
    }

    fn set_z_priority(&mut self, layer: &str, priority: ZPriority) {
        if let Some(slot) = self.layers.get_mut(layer) {
            *slot = Some(priority);
        }
        self.events.push(MapEvent::ZPriority {
            layer: layer.to_string(),
            z_priority: priority,
        });
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding: FitPadding) {
        self.viewport = Some(bounds);
        self.events.push(MapEvent::FitBounds { bounds, padding });
    }
}
