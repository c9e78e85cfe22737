//! Gear planner command-line entry point.
//!
//! Run with: `gear-planner <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Import, Optimize, Validate};

use crate::config::PlannerConfig;

/// Equipment and stat point planner
#[derive(Parser)]
#[command(name = "gear-planner")]
#[command(about = "Plan equipment and stat points for a character build", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Pick equipment and spend stat points for a saved build
    Optimize(Optimize),

    /// Check that base stats and free points match a level
    Validate(Validate),

    /// Merge an upstream equipment dump into an item catalog
    Import(Import),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GEAR_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlannerConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Optimize(cmd) => cmd.execute(&config),
        Command::Validate(cmd) => cmd.execute(),
        Command::Import(cmd) => cmd.execute(),
    }
}
