//! Merge an upstream equipment dump into an item catalog.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use gear_content::{CatalogLoader, DumpFile, apply_levels, merge_into_catalog};

/// Merge an upstream equipment dump into an item catalog
#[derive(Parser, Debug)]
pub struct Import {
    /// Item catalog to update (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Equipment dump ({"equipment": [...]} JSON)
    #[arg(short, long, value_name = "FILE")]
    pub dump: PathBuf,

    /// Also set every catalog item's level from the dump
    #[arg(long)]
    pub levels: bool,

    /// Report changes without writing the catalog
    #[arg(long)]
    pub dry_run: bool,
}

impl Import {
    pub fn execute(self) -> Result<()> {
        let mut catalog = CatalogLoader::load(&self.catalog)?;
        let dump = DumpFile::load(&self.dump)?;
        let before = catalog.len();

        let merged = merge_into_catalog(&mut catalog, &dump.equipment);

        println!("{}", style("Dump import").bold().cyan());
        println!("  Records in dump:   {}", dump.equipment.len());
        println!("  Existing items:    {}", before);
        println!(
            "  Added:             {}",
            style(merged.added.len()).green().bold()
        );
        println!("  Already present:   {}", merged.duplicates);
        println!("  Skipped:           {}", style(merged.skipped.len()).dim());
        for reason in &merged.skipped {
            tracing::debug!("Skipped: {}", reason);
        }

        if self.levels {
            let levels = apply_levels(&mut catalog, &dump.equipment);
            println!("  Levels updated:    {}", levels.updated);
            println!(
                "  Levels defaulted:  {}",
                style(levels.defaulted.len()).yellow()
            );
            for name in &levels.defaulted {
                tracing::debug!("No dump record for '{}', level set to 1", name);
            }
        }

        if self.dry_run {
            println!();
            println!("{}", style("Dry run: catalog not written").dim());
            return Ok(());
        }

        CatalogLoader::save(&self.catalog, &catalog)?;
        println!();
        println!(
            "{} {}",
            style("✓ Wrote").green().bold(),
            self.catalog.display()
        );
        Ok(())
    }
}
