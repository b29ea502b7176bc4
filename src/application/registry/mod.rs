//! Layer registry
//!
//! One slot per catalog entry, populated at most once when that layer's source
//! finishes loading. Loads run as independent tasks; the registry is queryable at
//! any point, including while slots are still empty.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::domain::entities::{LayerCatalog, LayerDescriptor, Overlay};
use crate::domain::ports::{DocumentSource, FeatureStyler, LoadError};
use crate::domain::services::render_overlay;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub descriptor: LayerDescriptor,
    overlay: Option<Overlay>,
}

impl RegistryEntry {
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.overlay.is_some()
    }
}

/// Result of one layer's load task.
#[derive(Debug)]
pub struct LoadOutcome {
    pub layer: String,
    pub result: Result<Overlay, LoadError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<LoadFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadFailure {
    pub layer: String,
    pub message: String,
}

impl LoadReport {
    pub fn record(&mut self, outcome: &LoadOutcome) {
        match &outcome.result {
            Ok(_) => self.loaded.push(outcome.layer.clone()),
            Err(e) => self.failed.push(LoadFailure {
                layer: outcome.layer.clone(),
                message: e.to_string(),
            }),
        }
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerRegistry {
    entries: Vec<RegistryEntry>,
}

impl LayerRegistry {
    /// Empty registry with one absent slot per descriptor.
    pub fn new(catalog: &LayerCatalog) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|descriptor| RegistryEntry {
                    descriptor: descriptor.clone(),
                    overlay: None,
                })
                .collect(),
        }
    }

    /// Spawn every load and wait for all of them to settle.
    ///
    /// `observe` sees each outcome in completion order, before it is applied.
    pub async fn load_all<F>(
        catalog: &LayerCatalog,
        source: Arc<dyn DocumentSource>,
        styler: Arc<dyn FeatureStyler>,
        mut observe: F,
    ) -> (Self, LoadReport)
    where
        F: FnMut(&LoadOutcome),
    {
        let mut registry = Self::new(catalog);
        let mut report = LoadReport::default();
        let mut loader = RegistryLoader::spawn(catalog, source, styler);
        while let Some(outcome) = loader.next().await {
            observe(&outcome);
            report.record(&outcome);
            registry.apply(outcome);
        }
        (registry, report)
    }

    /// Fold one load outcome into the registry.
    ///
    /// Returns `true` when a previously absent slot was populated. Failures, unknown
    /// layer names and repeated successes leave the registry unchanged.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        match outcome.result {
            Ok(overlay) => self.insert(&outcome.layer, overlay),
            Err(e) => {
                tracing::warn!(layer = %outcome.layer, error = %e, "layer failed to load");
                false
            }
        }
    }

    pub fn insert(&mut self, layer: &str, overlay: Overlay) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.descriptor.name == layer) else {
            tracing::warn!(layer, "load finished for a layer missing from the catalog");
            return false;
        };
        if entry.overlay.is_some() {
            tracing::warn!(layer, "layer already loaded; ignoring second result");
            return false;
        }
        tracing::info!(
            layer,
            features = overlay.features().len(),
            "layer loaded"
        );
        entry.overlay = Some(overlay);
        true
    }

    pub fn get(&self, layer: &str) -> Option<&Overlay> {
        self.entry(layer)?.overlay()
    }

    pub(crate) fn get_mut(&mut self, layer: &str) -> Option<&mut Overlay> {
        self.entries
            .iter_mut()
            .find(|e| e.descriptor.name == layer)?
            .overlay
            .as_mut()
    }

    pub fn entry(&self, layer: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.descriptor.name == layer)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn has_location(&self, location_key: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.descriptor.belongs_to(location_key))
    }

    pub fn loaded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_loaded()).count()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.entries.iter().all(RegistryEntry::is_loaded)
    }
}

/// Independent per-layer load tasks, observed one completion at a time.
///
/// Each descriptor gets its own task, so a slow or failing source never delays the
/// others. Loads are never cancelled: dropping the loader detaches whatever is
/// still in flight, and those results are discarded when they finish.
pub struct RegistryLoader {
    tasks: JoinSet<LoadOutcome>,
}

impl RegistryLoader {
    /// Start loading every catalog entry. Must be called inside a tokio runtime.
    pub fn spawn(
        catalog: &LayerCatalog,
        source: Arc<dyn DocumentSource>,
        styler: Arc<dyn FeatureStyler>,
    ) -> Self {
        tracing::debug!(origin = %source.origin(), layers = catalog.len(), "spawning layer loads");
        let mut tasks = JoinSet::new();
        for descriptor in catalog.iter() {
            let source = Arc::clone(&source);
            let styler = Arc::clone(&styler);
            let layer = descriptor.name.clone();
            let path = descriptor.source_path.clone();
            tasks.spawn(async move {
                tracing::debug!(layer = %layer, path = %path, "loading layer source");
                let result = source
                    .fetch_document(&path)
                    .await
                    .map(|document| render_overlay(&layer, &document, styler.as_ref()));
                LoadOutcome { layer, result }
            });
        }
        Self { tasks }
    }

    /// Next completed load, or `None` once every task has settled.
    pub async fn next(&mut self) -> Option<LoadOutcome> {
        loop {
            match self.tasks.join_next().await? {
                Ok(outcome) => return Some(outcome),
                Err(e) => tracing::warn!(error = %e, "layer load task did not complete"),
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for RegistryLoader {
    fn drop(&mut self) {
        self.tasks.detach_all();
    }
}
