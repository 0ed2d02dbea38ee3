//! Spectator CLI — Inspect display surfaces and map cursor positions.
//!
//! Usage:
//!   spectator resolve --surfaces <PATH>         Show the active display resolution
//!   spectator map --surfaces <PATH> <X> <Y>     Map a pointer into widget space
//!   spectator recenter <X> <Y>                  Offset a widget position for a middle pivot
//!   spectator check --surfaces <PATH>           Report which viewport is selected and why
//!
//! Surface files are JSON snapshots of host state (see `fixtures/surfaces/`).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use spectator_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "spectator",
    about = "Cursor coordinate mapping for HMD spectator screens",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/spectator/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the display mode and resolved display resolution
    Resolve {
        /// Surface snapshot (JSON)
        #[arg(short, long)]
        surfaces: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Map a pointer position (viewport pixels) into widget space
    Map {
        /// Surface snapshot (JSON)
        #[arg(short, long)]
        surfaces: PathBuf,

        /// Pointer X in viewport pixels
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Pointer Y in viewport pixels
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Widget width (defaults to config, 1920)
        #[arg(long)]
        widget_width: Option<f64>,

        /// Widget height (defaults to config, 1080)
        #[arg(long)]
        widget_height: Option<f64>,

        /// Clamp pointer percentages to [0, 1]
        #[arg(long)]
        clamp: bool,

        /// Fail instead of falling back to (0, 0) when no resolution is available
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Offset an absolute widget position for a middle (0.5, 0.5) pivot
    Recenter {
        /// Absolute X from the widget's top-left corner
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Absolute Y from the widget's top-left corner
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Target width (defaults to config, 1920)
        #[arg(long)]
        width: Option<f64>,

        /// Target height (defaults to config, 1080)
        #[arg(long)]
        height: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report each viewport in a surface snapshot and which one is selected
    Check {
        /// Surface snapshot (JSON)
        #[arg(short, long)]
        surfaces: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    spectator_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Resolve { surfaces, json } => commands::resolve::run(surfaces, json),
        Commands::Map {
            surfaces,
            x,
            y,
            widget_width,
            widget_height,
            clamp,
            strict,
            json,
        } => commands::map::run(
            &config,
            surfaces,
            x,
            y,
            widget_width,
            widget_height,
            clamp,
            strict,
            json,
        ),
        Commands::Recenter {
            x,
            y,
            width,
            height,
            json,
        } => commands::recenter::run(&config, x, y, width, height, json),
        Commands::Check { surfaces } => commands::check::run(surfaces),
    }
}
