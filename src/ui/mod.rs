pub mod error;
pub mod views;
