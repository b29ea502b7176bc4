//! Layer catalog entity
//!
//! Static table of every layer known to the session. Defined once at startup and
//! never mutated afterwards.

use std::collections::HashSet;

use crate::domain::entities::LayerDescriptor;
use crate::domain::value_objects::LayerCategory;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate layer name '{name}'\n  → Fix: Layer names are registry keys and must be unique")]
    DuplicateLayer { name: String },

    #[error("layer '{name}' has an empty {field}")]
    EmptyField { name: String, field: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerCatalog {
    layers: Vec<LayerDescriptor>,
}

impl LayerCatalog {
    pub fn new(layers: Vec<LayerDescriptor>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for layer in &layers {
            if layer.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    name: layer.name.clone(),
                    field: "name",
                });
            }
            if layer.location_key.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    name: layer.name.clone(),
                    field: "location",
                });
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(CatalogError::DuplicateLayer {
                    name: layer.name.clone(),
                });
            }
        }
        Ok(Self { layers })
    }

    /// The Magdeburg story-map table: two locations, one layer per category each.
    pub fn builtin() -> Self {
        let layer = |name: &str, location: &str, category, path: &str| {
            LayerDescriptor::new(name, location, category, format!("magdeburg/{}", path))
        };
        Self {
            layers: vec![
                layer(
                    "Büro 3DQR - Anker",
                    "Büro 3DQR",
                    LayerCategory::Anchor,
                    "Buero_3DQR/1_anker.geojson",
                ),
                layer(
                    "Büro 3DQR - Kontext",
                    "Büro 3DQR",
                    LayerCategory::BackgroundContext,
                    "Buero_3DQR/2_kontext.geojson",
                ),
                layer(
                    "Büro 3DQR - Erzählung",
                    "Büro 3DQR",
                    LayerCategory::Narrative,
                    "Buero_3DQR/3_erzaehlung.geojson",
                ),
                layer(
                    "MDR - Anker",
                    "MDR",
                    LayerCategory::Anchor,
                    "Landesfunkhaus_des_MDR/1_anker.geojson",
                ),
                layer(
                    "MDR - Kontext",
                    "MDR",
                    LayerCategory::BackgroundContext,
                    "Landesfunkhaus_des_MDR/2_MDR_Kontext.geojson",
                ),
                layer(
                    "MDR - Erzählung",
                    "MDR",
                    LayerCategory::Narrative,
                    "Landesfunkhaus_des_MDR/3_MDR_Erzaehlung.geojson",
                ),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn for_location<'a>(
        &'a self,
        location_key: &'a str,
    ) -> impl Iterator<Item = &'a LayerDescriptor> + 'a {
        self.layers.iter().filter(move |l| l.belongs_to(location_key))
    }

    /// Distinct location keys in first-seen order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.layers
            .iter()
            .map(|l| l.location_key.as_str())
            .filter(|k| seen.insert(*k))
            .collect()
    }

    pub fn has_location(&self, location_key: &str) -> bool {
        self.layers.iter().any(|l| l.belongs_to(location_key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
