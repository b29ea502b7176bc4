//! Geostage - location layer activation engine for story maps
//!
//! Geostage loads a catalog of geographic layers, groups them by location, and
//! drives a map surface as locations are activated: which overlays are attached,
//! in which draw order, and where the viewport is fitted.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    parse_script, ActivationEngine, Command, EngineOptions, LayerRegistry, LoadReport, Outcome,
    RegistryLoader,
};
pub use config::Config;
pub use domain::entities::{GeoDocument, LayerCatalog, LayerDescriptor, Overlay};
pub use domain::policies::{z_priority, ActivationPolicy};
pub use domain::value_objects::{GeoBounds, LayerCategory, ZPriority};
pub use error::{GeostageError, GeostageResult};
