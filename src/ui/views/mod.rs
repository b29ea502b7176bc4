//! Text views for command output

pub mod catalog;
pub mod load;
pub mod session;
