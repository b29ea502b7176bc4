//! JSON Event Sink
//!
//! Outputs session events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{SessionEvent, SessionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stdout; `command` is stamped on every event.
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SessionEventSink for JsonEventSink {
    fn on_event(&self, event: SessionEvent) {
        let command = self.command;
        let json = match event {
            SessionEvent::LoadStarted {
                origin,
                layer_count,
            } => {
                serde_json::json!({
                    "event": "load_start",
                    "command": command,
                    "origin": origin,
                    "layer_count": layer_count,
                })
            }

            SessionEvent::LayerLoaded {
                layer,
                feature_count,
                bounds,
            } => {
                serde_json::json!({
                    "event": "layer_loaded",
                    "command": command,
                    "layer": layer,
                    "feature_count": feature_count,
                    "bounds": bounds,
                })
            }

            SessionEvent::LayerFailed { layer, error } => {
                serde_json::json!({
                    "event": "layer_failed",
                    "command": command,
                    "layer": layer,
                    "error": error,
                })
            }

            SessionEvent::LoadCompleted { loaded, failed } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "load_complete",
                    "command": command,
                    "status": status,
                    "loaded": loaded,
                    "failed": failed,
                })
            }

            SessionEvent::CommandApplied {
                index,
                command: text,
                attached,
                detached,
                fitted,
            } => {
                serde_json::json!({
                    "event": "command",
                    "command": command,
                    "index": index,
                    "input": text,
                    "attached": attached,
                    "detached": detached,
                    "fitted": fitted,
                })
            }

            SessionEvent::Map(map_event) => {
                let mut value = serde_json::to_value(&map_event).unwrap_or_default();
                if let Some(object) = value.as_object_mut() {
                    object.insert("command".to_string(), command.into());
                }
                value
            }

            SessionEvent::Completed {
                active_locations,
                attached,
                viewport,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "active_locations": active_locations,
                    "attached": attached,
                    "viewport": viewport,
                })
            }
        };

        self.write_event(json);
    }
}
