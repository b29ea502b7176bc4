//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod document_source;
pub mod feature_styler;
pub mod map_surface;
pub mod session_events;

pub use document_source::{DocumentSource, LoadError};
pub use feature_styler::FeatureStyler;
pub use map_surface::{MapEvent, MapSurface};
pub use session_events::{NoopEventSink, SessionEvent, SessionEventSink};
