//! Check base stats and free points against a level.

use anyhow::Result;
use clap::Parser;
use console::style;

use gear_core::{StatBlock, expected_stat_total, validate_stats};

/// Check that base stats and free points match a level
#[derive(Parser, Debug)]
pub struct Validate {
    /// Character level
    #[arg(short, long)]
    pub level: u32,

    #[arg(long = "str", default_value_t = 0, allow_negative_numbers = true)]
    pub str_: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub int: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub wis: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub con: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub dex: i32,

    /// Unspent stat points
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub points: i32,
}

impl Validate {
    pub fn stats(&self) -> StatBlock {
        StatBlock::new(self.str_, self.int, self.wis, self.con, self.dex)
    }

    pub fn execute(self) -> Result<()> {
        let stats = self.stats();
        let actual = stats.sum() + i64::from(self.points);
        let expected = expected_stat_total(self.level);

        if validate_stats(self.level, &stats, self.points) {
            println!(
                "{} level {} with {} total stat points",
                style("✓").green().bold(),
                self.level,
                actual
            );
            return Ok(());
        }

        println!(
            "{} level {} expects {} total stat points, found {}",
            style("✗").red().bold(),
            self.level,
            expected,
            style(actual).red()
        );
        anyhow::bail!("Stat total does not match level {}", self.level)
    }
}
