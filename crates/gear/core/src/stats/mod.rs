//! Stat vectors used throughout the planner.
//!
//! Every stat-shaped value (base stats, targets, item deltas, allocated and
//! missing points) is a [`StatBlock`]: five signed integers keyed by
//! [`StatKind`]. Missing keys read as zero.

pub mod block;
pub mod kind;

pub use block::StatBlock;
pub use kind::StatKind;
