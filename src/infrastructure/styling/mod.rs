//! Feature styling implementations

mod retro;

pub use retro::{palette_color, RetroStyler};
