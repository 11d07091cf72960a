// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use eyepiece::constants::app_version;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "eyepiece")]
#[command(about = "Camera viewfinder overlay tools")]
#[command(version = app_version())]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a preview size from a list of supported sizes
    Select {
        /// Supported sizes, e.g. 640x480,1280x720,1920x1080
        #[arg(short, long)]
        sizes: String,

        /// Target aspect ratio (width / height)
        #[arg(short, long, conflicts_with = "display")]
        ratio: Option<f32>,

        /// Display size to take the target aspect ratio from, e.g. 1080x2340
        #[arg(short, long)]
        display: Option<String>,

        /// Pick the size closest to this height instead of the largest one
        #[arg(long)]
        height: Option<u32>,

        /// Aspect ratio tolerance (default from config)
        #[arg(short, long)]
        tolerance: Option<f32>,
    },

    /// Fold a JSON array of gesture events into an overlay transform
    Gesture {
        /// File with a JSON array of gesture events
        #[arg(short, long)]
        events: PathBuf,

        /// Rotate pans by the current rotation (default from config)
        #[arg(long)]
        rotation_aware: Option<bool>,
    },

    /// Compute the preview layout transform
    Preview {
        /// View size, e.g. 1080x1920
        #[arg(long)]
        view: String,

        /// Camera preview size, e.g. 1920x1080
        #[arg(long)]
        preview: String,

        /// Display rotation in degrees (0, 90, 180, 270)
        #[arg(long, default_value = "0")]
        rotation: i32,
    },

    /// Walk a simulated camera through open, configure and switch
    Simulate {
        /// Display size used for preview selection
        #[arg(short, long, default_value = "1080x2340")]
        display: String,
    },

    /// Print the effective configuration
    Config {
        /// Write the configuration back (to --config or the default location)
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=eyepiece=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Select {
            sizes,
            ratio,
            display,
            height,
            tolerance,
        } => cli::select_size(&config, &sizes, ratio, display.as_deref(), height, tolerance),
        Commands::Gesture {
            events,
            rotation_aware,
        } => cli::fold_gestures(&config, &events, rotation_aware),
        Commands::Preview {
            view,
            preview,
            rotation,
        } => cli::preview_layout(&view, &preview, rotation),
        Commands::Simulate { display } => cli::simulate(&config, &display),
        Commands::Config { save } => cli::show_config(&config, cli.config.as_deref(), save),
    }
}
