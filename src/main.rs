// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "vcam-output")]
#[command(about = "Inspect virtual camera output settings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in resolution presets
    Presets,

    /// Show how a resolution key is interpreted
    Resolve {
        /// Resolution key, e.g. "match", "1280x720" or "640X480"
        key: String,
    },

    /// Normalize a device path and print the v4l2loopback setup command
    Device {
        /// Device path (omit to use the default)
        path: Option<String>,
    },

    /// Load a settings document and print the resulting panel state
    Load {
        /// Settings as inline JSON
        #[arg(short, long, conflicts_with = "file")]
        json: Option<String>,

        /// Settings JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=vcam_output=info
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

    match cli.command {
        Commands::Presets => cli::list_presets(),
        Commands::Resolve { key } => cli::resolve_key(&key),
        Commands::Device { path } => cli::show_device(path.as_deref().unwrap_or_default()),
        Commands::Load { json, file } => cli::load_settings(json, file),
    }
}
