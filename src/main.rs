//! Geostage CLI
//!
//! Usage: geostage [--json] [-v] [--config FILE] <COMMAND>
//!
//! Commands:
//!   catalog  List catalog layers
//!   load     Load every layer source
//!   run      Replay activate/deactivate/focus/show/hide commands

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", ui::error::format_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let working_dir = std::env::current_dir()?;
    let loaded = geostage::config::discover(cli.config.as_deref(), &working_dir)?;

    init_tracing(cli.verbose, loaded.config.logging.level.as_deref());
    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }

    let config = loaded.config;
    match cli.command {
        Commands::Catalog => commands::catalog::cmd_catalog(&config, cli.json),
        Commands::Load => commands::load::cmd_load(&config, cli.json).await,
        Commands::Run { script, commands: inputs } => {
            commands::run::cmd_run(&config, script.as_deref(), &inputs, cli.json).await
        }
    }
}

/// `-v` wins over the configured level (which already includes `GEOSTAGE_LOG`).
fn init_tracing(verbose: u8, configured: Option<&str>) {
    let directive = match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
