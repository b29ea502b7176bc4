//! Domain Policies
//!
//! Business rules that govern draw order and activation.
//! These are pure functions over domain values.

mod activation_policy;
pub mod z_priority;

pub use activation_policy::ActivationPolicy;
pub use z_priority::z_priority;
