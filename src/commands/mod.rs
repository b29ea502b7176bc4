//! Command handlers for the geostage binary

pub mod catalog;
pub mod load;
pub mod run;

use std::sync::Arc;

use geostage::application::{LayerRegistry, LoadReport};
use geostage::domain::ports::{DocumentSource, FeatureStyler, SessionEvent, SessionEventSink};
use geostage::infrastructure::RetroStyler;
use geostage::LayerCatalog;

/// Load every catalog layer, reporting each outcome to `events` as it arrives.
pub async fn load_registry(
    catalog: &LayerCatalog,
    source: Arc<dyn DocumentSource>,
    events: &dyn SessionEventSink,
) -> (LayerRegistry, LoadReport) {
    events.on_event(SessionEvent::LoadStarted {
        origin: source.origin(),
        layer_count: catalog.len(),
    });

    let styler: Arc<dyn FeatureStyler> = Arc::new(RetroStyler::new());
    let (registry, report) = LayerRegistry::load_all(catalog, source, styler, |outcome| {
        let event = match &outcome.result {
            Ok(overlay) => SessionEvent::LayerLoaded {
                layer: outcome.layer.clone(),
                feature_count: overlay.features().len(),
                bounds: overlay.bounds(),
            },
            Err(e) => SessionEvent::LayerFailed {
                layer: outcome.layer.clone(),
                error: e.to_string(),
            },
        };
        events.on_event(event);
    })
    .await;

    events.on_event(SessionEvent::LoadCompleted {
        loaded: report.loaded.len(),
        failed: report.failed.len(),
    });
    (registry, report)
}
