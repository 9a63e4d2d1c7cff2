//! CLI frontend for Playbook play diagrams.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use pb_timeline::PlaybackSpeed;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pb",
    about = "Playbook: validate, inspect, and animate basketball play diagrams",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a play document and summarize it
    Check {
        /// Play document (JSON)
        file: PathBuf,
    },

    /// List advisory warnings for every phase
    Warnings {
        /// Play document (JSON)
        file: PathBuf,
    },

    /// Show the compiled schedule of every transition
    Timeline {
        /// Play document (JSON)
        file: PathBuf,

        /// Playback speed: 0.5, 1, 1.5, or 2
        #[arg(short, long, default_value = "1")]
        speed: PlaybackSpeed,
    },

    /// Show object positions and the ball owner at one instant
    Frame {
        /// Play document (JSON)
        file: PathBuf,

        /// Transition index (the departing phase)
        #[arg(short, long, default_value = "0")]
        transition: usize,

        /// Milliseconds into the transition
        #[arg(short, long)]
        at: f64,

        /// Playback speed: 0.5, 1, 1.5, or 2
        #[arg(short, long, default_value = "1")]
        speed: PlaybackSpeed,
    },

    /// Print a canned play document as JSON
    Template {
        /// Template id (see --list)
        id: Option<String>,

        /// List the available template ids
        #[arg(short, long)]
        list: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::Warnings { file } => commands::warnings::run(&file),
        Commands::Timeline { file, speed } => commands::timeline::run(&file, speed),
        Commands::Frame {
            file,
            transition,
            at,
            speed,
        } => commands::frame::run(&file, transition, at, speed),
        Commands::Template { id, list } => commands::template::run(id.as_deref(), list),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
