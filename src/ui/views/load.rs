use geostage::application::{LayerRegistry, LoadReport};

pub struct LoadView<'a> {
    origin: &'a str,
    registry: &'a LayerRegistry,
    report: &'a LoadReport,
}

impl<'a> LoadView<'a> {
    pub fn new(origin: &'a str, registry: &'a LayerRegistry, report: &'a LoadReport) -> Self {
        Self {
            origin,
            registry,
            report,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Geostage Load\n");
        out.push_str(&format!("  Data: {}\n\n", self.origin));

        for entry in self.registry.entries() {
            let name = &entry.descriptor.name;
            match entry.overlay() {
                Some(overlay) => {
                    let bounds = overlay
                        .bounds()
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| "no coordinates".to_string());
                    out.push_str(&format!(
                        "  ok    {}  {} features  {}\n",
                        name,
                        overlay.features().len(),
                        bounds
                    ));
                }
                None => {
                    let message = self
                        .report
                        .failed
                        .iter()
                        .find(|f| &f.layer == name)
                        .map(|f| f.message.as_str())
                        .unwrap_or("not loaded");
                    out.push_str(&format!("  FAIL  {}  {}\n", name, first_line(message)));
                }
            }
        }

        out.push_str(&format!(
            "\n{} loaded, {} failed\n",
            self.report.loaded.len(),
            self.report.failed.len()
        ));
        out
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostage::application::LoadOutcome;
    use geostage::domain::entities::{Overlay, StyledFeature};
    use geostage::domain::ports::LoadError;
    use geostage::domain::value_objects::{GeoBounds, GeometryKind, LatLng};
    use geostage::LayerCatalog;

    #[test]
    fn load_view_lists_successes_and_failures() {
        let catalog = LayerCatalog::builtin();
        let mut registry = LayerRegistry::new(&catalog);
        let point = LatLng {
            lat: 52.12,
            lng: 11.62,
        };
        let feature = StyledFeature {
            name: Some("Büro".to_string()),
            description: None,
            type_tag: Some("anker_polygon".to_string()),
            geometry: Some(GeometryKind::Point),
            bounds: Some(GeoBounds::from_point(point)),
            paint: None,
        };
        let outcome = LoadOutcome {
            layer: "MDR - Anker".to_string(),
            result: Ok(Overlay::new("MDR - Anker", vec![feature])),
        };
        let mut report = LoadReport::default();
        report.record(&outcome);
        registry.apply(outcome);

        let failed = LoadOutcome {
            layer: "MDR - Kontext".to_string(),
            result: Err(LoadError::NotFound {
                location: "data/kontext.geojson".to_string(),
            }),
        };
        report.record(&failed);
        registry.apply(failed);

        let out = LoadView::new("data", &registry, &report).render();
        assert!(out.contains("  ok    MDR - Anker  1 features"));
        assert!(out.contains("  FAIL  MDR - Kontext"));
        assert!(out.contains("  FAIL  MDR - Erzählung  not loaded"));
        assert!(out.ends_with("1 loaded, 1 failed\n"));
        assert!(!report.is_complete_success());
    }
}
