//! Gia Pha CLI - Command-line interface for Gia Pha
//!
//! Reads a family backup file and runs the relationship engine over it:
//! lineage recomputation, kinship lookups and family statistics.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

#[derive(Parser)]
#[command(name = "giapha")]
#[command(author = "Gia Pha Contributors")]
#[command(version)]
#[command(about = "Family tree reasoning: generations, birth order and kinship terms", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Gia Pha in the current directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Recompute generations and birth orders
    Lineage {
        /// Backup file (defaults to the configured data file)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Show every person instead of the preview limit
        #[arg(long)]
        all: bool,

        /// Write the recomputed values back
        #[arg(long)]
        apply: bool,

        /// Write to this file instead of the backup file
        #[arg(short, long, requires = "apply")]
        output: Option<PathBuf>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show what two persons call each other
    Kinship {
        /// First person (id or full name)
        a: String,

        /// Second person (id or full name)
        b: String,

        /// Backup file (defaults to the configured data file)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show family statistics
    Status {
        /// Backup file (defaults to the configured data file)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match std::env::current_dir() {
        Ok(root) => run(cli.command, &root),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands, root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Init { path } => commands::init(&path),
        Commands::Lineage {
            data,
            all,
            apply,
            output,
            json,
        } => commands::lineage(
            root,
            &commands::LineageOptions {
                data: data.as_deref(),
                all,
                apply,
                output: output.as_deref(),
                json,
            },
        ),
        Commands::Kinship { a, b, data, json } => {
            commands::kinship(root, &a, &b, data.as_deref(), json)
        }
        Commands::Status { data } => commands::status(root, data.as_deref()),
    }
}
