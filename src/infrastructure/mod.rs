//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `source/` - Document sources (filesystem, HTTP)
//! - `styling/` - Feature stylers (retro terminal palette)
//! - `map/` - Map surfaces (in-memory recording map)
//! - `events/` - Session event sinks (NDJSON)

pub mod events;
pub mod map;
pub mod source;
pub mod styling;

pub use events::JsonEventSink;
pub use map::RecordingMap;
pub use source::{FsDocumentSource, HttpDocumentSource};
pub use styling::RetroStyler;
