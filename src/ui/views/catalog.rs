use geostage::domain::entities::LayerCatalog;
use geostage::z_priority;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["LAYER", "LOCATION", "CATEGORY", "GEOMETRY", "Z"];

pub struct CatalogView<'a> {
    catalog: &'a LayerCatalog,
    origin: &'a str,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a LayerCatalog, origin: &'a str) -> Self {
        Self { catalog, origin }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Geostage Catalog\n");
        out.push_str(&format!("  Data:      {}\n", self.origin));
        out.push_str(&format!(
            "  Locations: {}\n",
            self.catalog.locations().join(", ")
        ));
        out.push_str(&format!("  Layers:    {}\n\n", self.catalog.len()));
        out.push_str(&self.render_table());
        out.push('\n');
        out
    }

    /// Aligned table, one row per layer in catalog order, no trailing newline.
    pub fn render_table(&self) -> String {
        let rows: Vec<[String; 5]> = self
            .catalog
            .iter()
            .map(|layer| {
                [
                    layer.name.clone(),
                    layer.location_key.clone(),
                    layer.category.to_string(),
                    layer
                        .geometry
                        .map(|g| g.to_string())
                        .unwrap_or_else(|| "mixed".to_string()),
                    z_priority(layer.category, layer.geometry).to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.width());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let header = HEADERS.map(str::to_string);
        std::iter::once(&header)
            .chain(rows.iter())
            .map(|row| format_row(row, &widths))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostage::domain::value_objects::{GeometryKind, LayerCategory};
    use geostage::LayerDescriptor;

    #[test]
    fn catalog_table_is_aligned_in_catalog_order() {
        let catalog = LayerCatalog::new(vec![
            LayerDescriptor::new("Dom - Anker", "Dom", LayerCategory::Anchor, "dom/1.geojson")
                .with_geometry(GeometryKind::Polygon),
            LayerDescriptor::new(
                "Dom - Kontext",
                "Dom",
                LayerCategory::BackgroundContext,
                "dom/2.geojson",
            )
            .with_geometry(GeometryKind::Polygon),
            LayerDescriptor::new(
                "Hafen - Route",
                "Hafen",
                LayerCategory::Narrative,
                "hafen/3.geojson",
            )
            .with_geometry(GeometryKind::Line),
            LayerDescriptor::new(
                "Hafen - Orte",
                "Hafen",
                LayerCategory::Narrative,
                "hafen/4.geojson",
            ),
        ])
        .unwrap();

        let view = CatalogView::new(&catalog, "data");
        insta::assert_snapshot!(view.render_table(), @r"
        LAYER          LOCATION  CATEGORY            GEOMETRY  Z
        Dom - Anker    Dom       anchor              polygon   300
        Dom - Kontext  Dom       background_context  polygon   100
        Hafen - Route  Hafen     narrative           line      400
        Hafen - Orte   Hafen     narrative           mixed     350
        ");
    }

    #[test]
    fn columns_align_by_display_width() {
        let catalog = LayerCatalog::new(vec![
            LayerDescriptor::new(
                "Bu\u{308}ro - Anker",
                "Bu\u{308}ro",
                LayerCategory::Anchor,
                "buero/1.geojson",
            ),
            LayerDescriptor::new("MDR - Anker", "MDR", LayerCategory::Anchor, "mdr/1.geojson"),
            LayerDescriptor::new("東京 - Anker", "東京", LayerCategory::Anchor, "tokyo/1.geojson"),
        ])
        .unwrap();

        let table = CatalogView::new(&catalog, "data").render_table();
        let location_columns: Vec<usize> = table
            .lines()
            .zip(["LOCATION", " Bu\u{308}ro ", " MDR ", " 東京 "])
            .map(|(line, cell)| {
                let idx = line.find(cell).unwrap() + usize::from(cell.starts_with(' '));
                line[..idx].width()
            })
            .collect();
        assert_eq!(location_columns, vec![14, 14, 14, 14], "table:\n{}", table);
    }

    #[test]
    fn builtin_catalog_lists_both_locations() {
        let catalog = LayerCatalog::builtin();
        let out = CatalogView::new(&catalog, "data").render();
        assert!(out.contains("Locations: Büro 3DQR, MDR"));
        assert!(out.contains("Layers:    6"));
        assert!(out.contains("MDR - Erzählung"));
    }
}
