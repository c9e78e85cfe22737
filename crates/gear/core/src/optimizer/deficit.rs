//! Stat deficit against a target.
//!
//! Deficits are always recomputed from a complete stat vector, never
//! accumulated item by item. That is what lets surplus on a stat absorb a
//! negative item delta: the combined value is still at or above target, so
//! the item adds no deficit there.

use crate::stats::{StatBlock, StatKind};

/// Per-stat shortfall and its total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deficit {
    /// `max(0, desired - stats)` for each stat.
    pub per_stat: StatBlock,
    /// Sum of `per_stat`.
    pub total: i64,
}

impl Deficit {
    pub fn is_met(&self) -> bool {
        self.total == 0
    }
}

/// Compute how far `stats` falls short of `desired`.
pub fn deficit(stats: &StatBlock, desired: &StatBlock) -> Deficit {
    let mut per_stat = StatBlock::ZERO;
    let mut total = 0i64;
    for stat in StatKind::ALL {
        let diff = i64::from(desired[stat]) - i64::from(stats[stat]);
        if diff > 0 {
            // Both operands are i32, so the difference of a positive gap fits
            // once clamped to the i32 range.
            let gap = diff.min(i64::from(i32::MAX));
            per_stat[stat] = gap as i32;
            total += gap;
        }
    }
    Deficit { per_stat, total }
}
