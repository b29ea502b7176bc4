//! Domain Layer
//!
//! Pure layer/location logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Catalog, descriptors, documents, overlays
//! - `value_objects/` - Categories, geometry kinds, bounds, z-priorities
//! - `services/` - Bounds union, overlay rendering
//! - `policies/` - Draw order and activation rules
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services and policies are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
