//! Session Event Port
//!
//! Observable interface for loading and scripted sessions. Drives the NDJSON
//! stream of the CLI and can be used for progress reporting.

use crate::domain::ports::MapEvent;
use crate::domain::value_objects::GeoBounds;

/// Event emitted while loading layers or replaying commands
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Registry population started
    LoadStarted { origin: String, layer_count: usize },

    /// One layer's document arrived and was rendered
    LayerLoaded {
        layer: String,
        feature_count: usize,
        bounds: Option<GeoBounds>,
    },

    /// One layer's document could not be loaded; its slot stays absent
    LayerFailed { layer: String, error: String },

    /// Every load has settled
    LoadCompleted { loaded: usize, failed: usize },

    /// A command was applied to the engine
    CommandApplied {
        index: usize,
        command: String,
        attached: Vec<String>,
        detached: Vec<String>,
        fitted: Option<GeoBounds>,
    },

    /// Side effect observed on the map
    Map(MapEvent),

    /// Session finished
    Completed {
        active_locations: Vec<String>,
        attached: Vec<String>,
        viewport: Option<GeoBounds>,
    },
}

/// Trait for receiving session events
pub trait SessionEventSink: Send + Sync {
    fn on_event(&self, event: SessionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SessionEventSink for NoopEventSink {
    fn on_event(&self, _event: SessionEvent) {}
}
