//! Application Layer
//!
//! Stateful orchestration on top of the domain.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the mutable session state: registry slots, active locations, attachment
//!
//! ## Components
//!
//! - `LayerRegistry` / `RegistryLoader` - concurrent, incremental source loading
//! - `ActivationState` - set of active location keys
//! - `ActivationEngine` - attach/detach, z-priority, viewport fitting
//! - `session` - parse and replay UI commands

pub mod activation_state;
pub mod engine;
pub mod registry;
pub mod session;

pub use activation_state::ActivationState;
pub use engine::{ActivationEngine, EngineOptions, Outcome};
pub use registry::{LayerRegistry, LoadFailure, LoadOutcome, LoadReport, RegistryEntry, RegistryLoader};
pub use session::{parse_script, run_commands, Command, ScriptError};
