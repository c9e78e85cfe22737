//! Equipment and stat point optimizer.
//!
//! [`Optimizer::optimize`] turns a [`BuildRequest`] and a catalog into an
//! [`OptimizationResult`]:
//!
//! ```text
//! catalog ─► filter (class, level) ─► CandidatePool
//!                                          │
//! base + locked items ─► LockedLayout ─► SlotAllocator (greedy + descent)
//!                                          │
//!                     equipped stats ─► allocate_points ─► result
//! ```
//!
//! Every call is a pure function of its inputs. The catalog is borrowed and
//! never modified; equipped entries are clones.

pub mod cost;
pub mod deficit;
pub mod filter;
pub mod points;
pub mod slots;

pub use cost::{
    BuildScore, ExpScore, PRIMARY_STAT_COST, SECONDARY_STAT_COST, cost_order, exp_score,
    score_build, stat_cost,
};
pub use deficit::{Deficit, deficit};
pub use filter::{CandidatePool, filter_candidates};
pub use points::{PointAllocation, allocate_points};
pub use slots::{Allocation, LockedLayout, SlotAllocator};

use crate::config::OptimizerConfig;
use crate::item::{EquippedItem, HeroClass, Item};
use crate::stats::StatBlock;
use crate::validate::{expected_stat_total, validate_stats};
use crate::warning::{OptimizationWarning, WarningSeverity};

/// Everything the optimizer needs to know about the character.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildRequest {
    pub base: StatBlock,
    pub desired: StatBlock,
    /// Free stat points. Negative budgets are treated as zero.
    pub available_points: i32,
    pub class: HeroClass,
    pub level: u32,
    /// Items pinned to their slots before the search runs.
    pub locked: Vec<Item>,
}

impl BuildRequest {
    /// A request with zeroed stats, no points, and nothing locked.
    pub fn new(class: HeroClass, level: u32) -> Self {
        Self {
            base: StatBlock::ZERO,
            desired: StatBlock::ZERO,
            available_points: 0,
            class,
            level,
            locked: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: StatBlock) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_desired(mut self, desired: StatBlock) -> Self {
        self.desired = desired;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: i32) -> Self {
        self.available_points = points;
        self
    }

    #[must_use]
    pub fn with_locked(mut self, locked: Vec<Item>) -> Self {
        self.locked = locked;
        self
    }
}

/// How the slot search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchSummary {
    pub passes: u32,
    pub converged: bool,
    pub score: Option<BuildScore>,
}

/// Optimizer output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationResult {
    /// False iff some deficit could not be covered by the point budget.
    pub success: bool,
    /// Locked items first, then chosen items in slot fill order.
    pub items: Vec<EquippedItem>,
    /// Base stats plus allocated and missing points: the base stats the
    /// character would need for the target, were the missing points found.
    pub final_base_stats: StatBlock,
    /// Base stats plus items plus allocated points.
    pub final_stats: StatBlock,
    pub points_allocated: StatBlock,
    pub missing_stats: StatBlock,
    /// Free points left after covering every deficit.
    pub unspent_points: u32,
    pub warnings: Vec<OptimizationWarning>,
    pub search: SearchSummary,
}

impl OptimizationResult {
    /// Equipped items that the search picked (not locked).
    pub fn chosen_items(&self) -> impl Iterator<Item = &EquippedItem> {
        self.items.iter().filter(|equipped| !equipped.locked)
    }

    pub fn locked_items(&self) -> impl Iterator<Item = &EquippedItem> {
        self.items.iter().filter(|equipped| equipped.locked)
    }
}

/// Equipment/point optimizer with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Pick items for every open slot and spend the point budget.
    pub fn optimize(&self, request: &BuildRequest, catalog: &[Item]) -> OptimizationResult {
        let mut warnings = Vec::new();

        let points = match u32::try_from(request.available_points) {
            Ok(points) => points,
            Err(_) => {
                warnings.push(OptimizationWarning::NegativePointBudget {
                    points: request.available_points,
                });
                0
            }
        };

        if self.config.check_stat_budget
            && !validate_stats(request.level, &request.base, request.available_points)
        {
            warnings.push(OptimizationWarning::InconsistentStatBudget {
                level: request.level,
                actual: request.base.sum() + i64::from(request.available_points),
                expected: expected_stat_total(request.level),
            });
        }

        let pool = CandidatePool::from_catalog(catalog, request.class, request.level);
        let layout = LockedLayout::build(
            &request.base,
            &request.locked,
            request.class,
            request.level,
            &mut warnings,
        );
        let open_slots = layout.open_slots();

        tracing::debug!(
            "Optimizing {} level {}: {} candidates, {} open slots, {} locked",
            request.class,
            request.level,
            pool.len(),
            open_slots.len(),
            layout.equipped.len()
        );

        let allocation = SlotAllocator::new(
            &pool,
            request.desired,
            points,
            request.class,
            layout.baseline,
            open_slots,
        )
        .run(self.config.refinement_passes);

        if !allocation.converged && self.config.refinement_passes > 0 {
            warnings.push(OptimizationWarning::RefinementNotConverged {
                passes: allocation.passes,
            });
        }

        let equipped_stats = allocation.stats();
        let spent = allocate_points(&equipped_stats, &request.desired, points, request.class);

        let mut items = layout.equipped;
        items.extend(allocation.equipped().map(|(slot, item)| EquippedItem {
            item: item.clone(),
            slot,
            locked: false,
        }));

        for warning in &warnings {
            log_warning(warning);
        }

        tracing::info!(
            "Optimization finished: success={}, {} item(s), missing=[{}]",
            spent.success,
            items.len(),
            spent.missing
        );

        OptimizationResult {
            success: spent.success,
            items,
            final_base_stats: request.base + spent.allocated + spent.missing,
            final_stats: equipped_stats + spent.allocated,
            points_allocated: spent.allocated,
            missing_stats: spent.missing,
            unspent_points: spent.unspent,
            warnings,
            search: SearchSummary {
                passes: allocation.passes,
                converged: allocation.converged,
                score: allocation.score(),
            },
        }
    }
}

fn log_warning(warning: &OptimizationWarning) {
    match warning.severity() {
        WarningSeverity::Info => tracing::info!(code = warning.code(), "{}", warning),
        WarningSeverity::Validation => tracing::warn!(code = warning.code(), "{}", warning),
    }
}

/// Run the optimizer with the default configuration.
pub fn optimize(request: &BuildRequest, catalog: &[Item]) -> OptimizationResult {
    Optimizer::default().optimize(request, catalog)
}
