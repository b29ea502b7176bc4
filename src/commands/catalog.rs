//! Catalog command handler

use std::process::ExitCode;

use anyhow::Result;

use geostage::z_priority;
use geostage::Config;

use crate::ui::views::catalog::CatalogView;

pub fn cmd_catalog(config: &Config, json: bool) -> Result<ExitCode> {
    let catalog = config.catalog()?;
    let origin = config.data.origin();

    if json {
        for layer in catalog.iter() {
            let out = serde_json::json!({
                "event": "layer",
                "command": "catalog",
                "name": layer.name,
                "location": layer.location_key,
                "category": layer.category,
                "geometry": layer.geometry,
                "z_priority": z_priority(layer.category, layer.geometry),
                "path": layer.source_path,
            });
            println!("{}", out);
        }
        let out = serde_json::json!({
            "event": "complete",
            "command": "catalog",
            "data": origin,
            "locations": catalog.locations(),
            "layer_count": catalog.len(),
        });
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", CatalogView::new(&catalog, &origin).render());
    Ok(ExitCode::SUCCESS)
}
