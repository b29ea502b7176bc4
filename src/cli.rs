use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Geostage - location layer activation engine for story maps
#[derive(Parser, Debug)]
#[command(name = "geostage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./geostage.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog layers with location, category and draw order
    Catalog,

    /// Load every layer source and report per-layer results
    Load,

    /// Load the registry and replay location/layer commands
    Run {
        /// Read commands from a file, one per line
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Commands such as "activate MDR" or "hide MDR - Kontext"
        commands: Vec<String>,
    },
}
