//! `shapegen` command line: generate code from a model, validate a model,
//! or print a service's operation slots.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Model-driven record and service builder synthesis")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate Rust source for a model
    Generate {
        /// Path to the JSON model
        #[arg(long)]
        model: PathBuf,
        /// Path to shapegen.toml; defaults apply when absent
        #[arg(long, default_value = "shapegen.toml")]
        config: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Load and validate a model, including identifier collisions
    Check {
        /// Path to the JSON model
        #[arg(long)]
        model: PathBuf,
        /// Path to shapegen.toml; defaults apply when absent
        #[arg(long, default_value = "shapegen.toml")]
        config: PathBuf,
    },

    /// Print the ordered operation slots of a service
    Slots {
        /// Path to the JSON model
        #[arg(long)]
        model: PathBuf,
        /// Service name
        #[arg(long)]
        service: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Generate { model, config, out } => {
            commands::generate(&model, &config, out.as_deref())
        }
        Command::Check { model, config } => commands::check(&model, &config),
        Command::Slots { model, service } => commands::slots(&model, &service),
    }
}
