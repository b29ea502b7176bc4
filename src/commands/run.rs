//! Run command handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use geostage::application::{parse_script, run_commands, ActivationEngine, Command};
use geostage::domain::ports::{NoopEventSink, SessionEvent, SessionEventSink};
use geostage::infrastructure::{JsonEventSink, RecordingMap};
use geostage::{Config, GeostageError};

use super::load_registry;
use crate::ui::views::session::{render_command, render_summary};

pub async fn cmd_run(
    config: &Config,
    script: Option<&Path>,
    inputs: &[String],
    json: bool,
) -> Result<ExitCode> {
    let commands = collect_commands(script, inputs).await?;
    if commands.is_empty() {
        anyhow::bail!("no commands given; pass commands such as \"activate MDR\" or --script FILE");
    }

    let catalog = config.catalog()?;
    let source = config.document_source()?;

    let json_sink = json.then(|| JsonEventSink::stdout("run"));
    let events: &dyn SessionEventSink = match &json_sink {
        Some(sink) => sink,
        None => &NoopEventSink,
    };

    let (registry, report) = load_registry(&catalog, source, events).await;

    if !json {
        let center = config.map.center();
        println!("Geostage Run");
        println!("  Data:   {}", config.data.origin());
        println!("  Policy: {}", config.activation.policy);
        println!(
            "  View:   {:.4}, {:.4} @ zoom {}",
            center.lat, center.lng, config.map.zoom
        );
        println!(
            "  Loaded: {}/{} layers",
            report.loaded.len(),
            catalog.len()
        );
        for failure in &report.failed {
            println!("  FAIL   {}", failure.layer);
        }
        println!();
    }

    let mut engine = ActivationEngine::new(registry, RecordingMap::new(), config.engine_options());
    let mut seen = 0;
    run_commands(&mut engine, &commands, |index, command, outcome, engine| {
        let map_events = &engine.map().events()[seen..];
        seen = engine.map().events().len();

        if json {
            events.on_event(SessionEvent::CommandApplied {
                index,
                command: command.to_string(),
                attached: outcome.attached.clone(),
                detached: outcome.detached.clone(),
                fitted: outcome.fitted,
            });
            for event in map_events {
                events.on_event(SessionEvent::Map(event.clone()));
            }
        } else {
            print!("{}", render_command(index, command, map_events));
        }
    });

    let viewport = engine.map().viewport();
    if json {
        events.on_event(SessionEvent::Completed {
            active_locations: engine.active_locations().iter().map(str::to_string).collect(),
            attached: engine.attached().map(str::to_string).collect(),
            viewport,
        });
    } else {
        print!(
            "{}",
            render_summary(engine.active_locations().iter(), engine.attached(), viewport)
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Script lines first, then positional commands.
async fn collect_commands(script: Option<&Path>, inputs: &[String]) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    if let Some(path) = script {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read script {}", path.display()))?;
        commands.extend(parse_script(&text).map_err(GeostageError::from)?);
    }

    for (i, input) in inputs.iter().enumerate() {
        commands.push(Command::parse(input, i + 1).map_err(GeostageError::from)?);
    }

    Ok(commands)
}
