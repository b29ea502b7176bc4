//! Map surface implementations

mod recording;

pub use recording::RecordingMap;
