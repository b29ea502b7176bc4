//! Activation state
//!
//! The set of location keys currently contributing to viewport fitting. Membership
//! only; a location being active says nothing about which of its layers are
//! attached.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationState {
    active: BTreeSet<String>,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the location was not active before.
    pub fn activate(&mut self, location_key: &str) -> bool {
        self.active.insert(location_key.to_string())
    }

    /// Returns `true` if the location was active before.
    pub fn deactivate(&mut self, location_key: &str) -> bool {
        self.active.remove(location_key)
    }

    pub fn is_active(&self, location_key: &str) -> bool {
        self.active.contains(location_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
