//! Load command handler

use std::process::ExitCode;

use anyhow::Result;

use geostage::domain::ports::NoopEventSink;
use geostage::infrastructure::JsonEventSink;
use geostage::Config;

use super::load_registry;
use crate::ui::views::load::LoadView;

/// Exits with failure when any layer could not be loaded.
pub async fn cmd_load(config: &Config, json: bool) -> Result<ExitCode> {
    let catalog = config.catalog()?;
    let source = config.document_source()?;

    let (registry, report) = if json {
        load_registry(&catalog, source, &JsonEventSink::stdout("load")).await
    } else {
        load_registry(&catalog, source, &NoopEventSink).await
    };

    if !json {
        let origin = config.data.origin();
        print!("{}", LoadView::new(&origin, &registry, &report).render());
    }

    if report.is_complete_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
