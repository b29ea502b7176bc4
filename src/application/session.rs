//! Scripted session
//!
//! Replays UI events against an engine. One command per line:
//!
//! ```text
//! activate Büro 3DQR
//! focus MDR
//! hide MDR - Kontext
//! show MDR - Kontext
//! deactivate MDR
//! ```
//!
//! The argument is the rest of the line, so keys may contain spaces. `#` starts a
//! comment line.

use serde::Serialize;

use crate::application::engine::{ActivationEngine, Outcome};
use crate::domain::ports::MapSurface;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Activate { location: String },
    Deactivate { location: String },
    Focus { location: String },
    Toggle { layer: String, visible: bool },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{verb}' (expected activate, deactivate, focus, show or hide)")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: '{verb}' needs an argument")]
    MissingArgument { line: usize, verb: String },
}

impl Command {
    /// Parse a single command; `line` is only used for error messages.
    pub fn parse(input: &str, line: usize) -> Result<Self, ScriptError> {
        let input = input.trim();
        let (verb, arg) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };
        let verb_lower = verb.to_lowercase();

        if !matches!(
            verb_lower.as_str(),
            "activate" | "deactivate" | "focus" | "show" | "hide"
        ) {
            return Err(ScriptError::UnknownCommand {
                line,
                verb: verb.to_string(),
            });
        }
        if arg.is_empty() {
            return Err(ScriptError::MissingArgument {
                line,
                verb: verb.to_string(),
            });
        }

        let arg = arg.to_string();
        Ok(match verb_lower.as_str() {
            "activate" => Command::Activate { location: arg },
            "deactivate" => Command::Deactivate { location: arg },
            "focus" => Command::Focus { location: arg },
            "show" => Command::Toggle {
                layer: arg,
                visible: true,
            },
            _ => Command::Toggle {
                layer: arg,
                visible: false,
            },
        })
    }

    pub fn apply<M: MapSurface>(&self, engine: &mut ActivationEngine<M>) -> Outcome {
        match self {
            Command::Activate { location } => engine.activate_location(location),
            Command::Deactivate { location } => engine.deactivate_location(location),
            Command::Focus { location } => engine.focus_location(location),
            Command::Toggle { layer, visible } => engine.toggle_layer(layer, *visible),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Activate { location } => write!(f, "activate {}", location),
            Command::Deactivate { location } => write!(f, "deactivate {}", location),
            Command::Focus { location } => write!(f, "focus {}", location),
            Command::Toggle {
                layer,
                visible: true,
            } => write!(f, "show {}", layer),
            Command::Toggle {
                layer,
                visible: false,
            } => write!(f, "hide {}", layer),
        }
    }
}

/// Parse a whole script, skipping blank lines and `#` comments.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ScriptError> {
    script
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| Command::parse(line, line_no))
        .collect()
}

/// Run commands in order. `observe` sees each outcome and the engine right after
/// the command was applied.
pub fn run_commands<M, F>(
    engine: &mut ActivationEngine<M>,
    commands: &[Command],
    mut observe: F,
) -> Vec<Outcome>
where
    M: MapSurface,
    F: FnMut(usize, &Command, &Outcome, &ActivationEngine<M>),
{
    commands
        .iter()
        .enumerate()
        .map(|(index, command)| {
            tracing::info!(%command, "running");
            let outcome = command.apply(engine);
            observe(index, command, &outcome, engine);
            outcome
        })
        .collect()
}
