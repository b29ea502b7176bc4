//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod bounds_union;
mod overlay_renderer;

pub use bounds_union::{overlay_bounds_union, union_bounds};
pub use overlay_renderer::render_overlay;
