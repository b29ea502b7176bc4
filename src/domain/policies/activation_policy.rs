//! Activation policy
//!
//! Decides which of a location's layers are attached automatically when the
//! location is activated.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LayerCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationPolicy {
    /// Attach every loaded layer of the location.
    #[default]
    AttachAll,
    /// Attach only the anchor layer; the rest stay toggle-only.
    AnchorOnly,
}

impl ActivationPolicy {
    pub fn auto_attaches(&self, category: LayerCategory) -> bool {
        match self {
            ActivationPolicy::AttachAll => true,
            ActivationPolicy::AnchorOnly => category == LayerCategory::Anchor,
        }
    }
}

impl std::str::FromStr for ActivationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "attach_all" | "all" => Ok(ActivationPolicy::AttachAll),
            "anchor_only" | "anchor" => Ok(ActivationPolicy::AnchorOnly),
            other => Err(format!("unknown activation policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for ActivationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationPolicy::AttachAll => write!(f, "attach_all"),
            ActivationPolicy::AnchorOnly => write!(f, "anchor_only"),
        }
    }
}
