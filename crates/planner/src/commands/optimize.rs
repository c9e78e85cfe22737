//! Optimize a saved build against the item catalog.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use gear_content::ContentFactory;
use gear_core::{OptimizationResult, Optimizer, WarningSeverity};

use crate::config::PlannerConfig;

/// Pick equipment and spend stat points for a saved build
#[derive(Parser, Debug)]
pub struct Optimize {
    /// Data directory with items.json and builds/ (defaults to GEAR_DATA_DIR, then ./data)
    #[arg(short, long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Build profile name (reads builds/<NAME>.toml)
    #[arg(short, long, value_name = "NAME")]
    pub build: String,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl Optimize {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let data_dir = config.resolve_data_dir(self.data);
        let factory = ContentFactory::new(&data_dir);

        let catalog = factory.load_catalog()?;
        let optimizer_config = config.apply(factory.load_config()?);
        let request = factory.load_request(&self.build, &catalog)?;

        tracing::info!(
            "Optimizing build '{}' from {}",
            self.build,
            data_dir.display()
        );
        let result = Optimizer::new(optimizer_config).optimize(&request, &catalog);

        if self.json {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize optimization result")?;
            println!("{}", json);
        } else {
            print_summary(&self.build, &result);
        }

        Ok(())
    }
}

fn print_summary(build: &str, result: &OptimizationResult) {
    let status = if result.success {
        style("✓ target reached").green().bold()
    } else {
        style("✗ target not reached").red().bold()
    };
    println!("{} {}", style(format!("Build '{}':", build)).bold().cyan(), status);
    println!();

    println!("{}", style("Equipment:").bold().yellow());
    if result.items.is_empty() {
        println!("  {}", style("(nothing equipped)").dim());
    }
    for equipped in &result.items {
        let lock = if equipped.locked { " [locked]" } else { "" };
        println!(
            "  {:<9} {}{}  {}",
            equipped.slot.as_ref(),
            style(equipped.name()).bold(),
            style(lock).magenta(),
            style(equipped.item.stats).dim()
        );
    }
    println!();

    println!("{}", style("Stats:").bold().yellow());
    println!("  Final stats:      {}", result.final_stats);
    println!("  Final base stats: {}", result.final_base_stats);
    println!("  Points allocated: {}", result.points_allocated);
    println!("  Unspent points:   {}", result.unspent_points);
    if !result.missing_stats.is_zero() {
        println!(
            "  Missing:          {}",
            style(result.missing_stats).red()
        );
    }
    println!(
        "  Search:           {} pass(es), {}",
        result.search.passes,
        if result.search.converged {
            "converged"
        } else {
            "stopped at pass cap"
        }
    );

    if !result.warnings.is_empty() {
        println!();
        println!("{}", style("Warnings:").bold().yellow());
        for warning in &result.warnings {
            let tag = match warning.severity() {
                WarningSeverity::Info => style(warning.code()).dim(),
                WarningSeverity::Validation => style(warning.code()).yellow(),
            };
            println!("  {} {}", tag, warning);
        }
    }
}
