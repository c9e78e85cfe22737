//! Equipment and stat point planning for character builds.
//!
//! `gear-core` holds the pure planning logic shared by the CLI and offline
//! tools: the stat and item model, the EXP cost model, and the optimizer that
//! picks one item per slot and spends free stat points to reach a target.
//! Nothing here performs I/O; loaders live in `gear-content`.
pub mod config;
pub mod item;
pub mod optimizer;
pub mod stats;
pub mod validate;
pub mod warning;

pub use config::OptimizerConfig;
pub use item::{
    ClassRestriction, EquippedItem, HeroClass, Item, ItemLevel, MASTER_LEVEL, SlotKind,
};
pub use optimizer::{
    BuildRequest, BuildScore, Deficit, ExpScore, OptimizationResult, Optimizer, SearchSummary,
    allocate_points, cost_order, deficit, exp_score, filter_candidates, optimize, stat_cost,
};
pub use stats::{StatBlock, StatKind};
pub use validate::{expected_stat_total, validate_stats};
pub use warning::{OptimizationWarning, WarningSeverity};
