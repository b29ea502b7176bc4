//! Layer category value object
//!
//! Categories decide the paint tier of a layer:
//! - `BackgroundContext` - surrounding areas and points of interest
//! - `Narrative` - routes and story points
//! - `Anchor` - the place itself

use serde::{Deserialize, Serialize};

/// Ordering class of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerCategory {
    #[serde(alias = "kontext")]
    BackgroundContext,
    #[serde(alias = "erzaehlung")]
    Narrative,
    #[serde(alias = "anker")]
    Anchor,
}

impl LayerCategory {
    /// Back-to-front painter's order used when attaching a location's layers.
    pub const PAINT_ORDER: [LayerCategory; 3] = [
        LayerCategory::BackgroundContext,
        LayerCategory::Narrative,
        LayerCategory::Anchor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerCategory::BackgroundContext => "background_context",
            LayerCategory::Narrative => "narrative",
            LayerCategory::Anchor => "anchor",
        }
    }
}

impl std::fmt::Display for LayerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "background_context" | "background-context" | "kontext" => {
                Ok(LayerCategory::BackgroundContext)
            }
            "narrative" | "erzaehlung" => Ok(LayerCategory::Narrative),
            "anchor" | "anker" => Ok(LayerCategory::Anchor),
            other => Err(format!("unknown layer category '{}'", other)),
        }
    }
}
