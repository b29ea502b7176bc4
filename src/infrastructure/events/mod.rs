//! Event Sink Implementations
//!
//! Concrete implementations of SessionEventSink:
//! - JsonEventSink: NDJSON output for scripting/CI

mod json;

pub use json::JsonEventSink;
