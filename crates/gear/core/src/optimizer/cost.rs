//! EXP cost model and build scoring.
//!
//! Raising a stat costs EXP, and a class raises its primary stats far more
//! cheaply than the rest. Scoring spends the free point budget on the most
//! expensive deficits first, so whatever stays unmet is the cheapest to buy
//! later with EXP.
//!
//! # Ordering
//!
//! [`ExpScore`] compares lexicographically on `(missing, spent)`: less unmet
//! EXP wins, then less spent EXP. [`BuildScore`] adds a final tie-break on
//! the raw stat total (higher wins) so that, among builds that are equally
//! good on EXP, the one carrying more stats is preferred over an empty slot.

use core::cmp::{Ordering, Reverse};

use crate::item::HeroClass;
use crate::stats::{StatBlock, StatKind};

use super::deficit::deficit;

/// EXP cost per point for a class's primary stats.
pub const PRIMARY_STAT_COST: u64 = 2_000_000;

/// EXP cost per point for every other stat.
pub const SECONDARY_STAT_COST: u64 = 10_000_000;

/// EXP cost of raising `stat` by one point as `class`.
pub fn stat_cost(stat: StatKind, class: HeroClass) -> u64 {
    if class.is_primary(stat) {
        PRIMARY_STAT_COST
    } else {
        SECONDARY_STAT_COST
    }
}

/// Stats sorted by descending cost; equal costs keep canonical order.
pub fn cost_order(class: HeroClass) -> [StatKind; 5] {
    let mut order = StatKind::ALL;
    order.sort_by_key(|&stat| Reverse(stat_cost(stat, class)));
    order
}

/// EXP left unmet and EXP spent after distributing the point budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExpScore {
    /// EXP cost of deficit the budget could not cover.
    pub missing: u64,
    /// EXP cost of the points actually spent.
    pub spent: u64,
}

/// Score a deficit vector against a point budget.
pub fn exp_score(deficits: &StatBlock, available_points: u32, class: HeroClass) -> ExpScore {
    let mut budget = u64::from(available_points);
    let mut score = ExpScore::default();

    for stat in cost_order(class) {
        let need = u64::try_from(deficits[stat]).unwrap_or(0);
        if need == 0 {
            continue;
        }
        let covered = need.min(budget);
        budget -= covered;

        let cost = stat_cost(stat, class);
        score.spent = score.spent.saturating_add(covered.saturating_mul(cost));
        score.missing = score
            .missing
            .saturating_add((need - covered).saturating_mul(cost));
    }

    score
}

/// Full ranking key for a candidate build. Smaller is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuildScore {
    pub exp: ExpScore,
    /// Sum of all five stats of the build.
    pub stat_total: i64,
}

impl BuildScore {
    pub fn is_better_than(&self, other: &BuildScore) -> bool {
        self < other
    }
}

impl Ord for BuildScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exp
            .cmp(&other.exp)
            .then_with(|| other.stat_total.cmp(&self.stat_total))
    }
}

impl PartialOrd for BuildScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score the complete stat vector of a build.
pub fn score_build(
    stats: &StatBlock,
    desired: &StatBlock,
    available_points: u32,
    class: HeroClass,
) -> BuildScore {
    let shortfall = deficit(stats, desired);
    BuildScore {
        exp: exp_score(&shortfall.per_stat, available_points, class),
        stat_total: stats.sum(),
    }
}
