//! Non-fatal diagnostics produced by an optimization run.
//!
//! The optimizer never fails: inconsistent input is normalized and reported
//! here instead. Each warning carries a [`WarningSeverity`] so callers can
//! decide what to surface.

use crate::item::{HeroClass, SlotKind};

/// How much a warning should concern the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WarningSeverity {
    /// Informational; the result is exactly what was asked for.
    Info,

    /// Part of the input was invalid and was normalized or ignored.
    ///
    /// Examples: negative point budget, locked item in an unknown slot
    Validation,
}

impl WarningSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Validation => "validation",
        }
    }
}

/// A diagnostic attached to an [`crate::OptimizationResult`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum OptimizationWarning {
    #[error("point budget {points} is negative; treating it as 0")]
    NegativePointBudget { points: i32 },

    #[error("locked item '{name}' has unknown slot type '{slot}' and was ignored")]
    LockedItemUnknownSlot { name: String, slot: String },

    #[error("locked item '{name}' was ignored: every {slot} slot is already locked")]
    LockedSlotFull { name: String, slot: SlotKind },

    #[error("locked item '{name}' is not normally wearable by a level {level} {class}")]
    LockedItemRestricted {
        name: String,
        class: HeroClass,
        level: u32,
    },

    #[error(
        "base stats plus free points total {actual}, but level {level} implies {expected}"
    )]
    InconsistentStatBudget {
        level: u32,
        actual: i64,
        expected: i64,
    },

    #[error("slot refinement stopped after {passes} passes without converging")]
    RefinementNotConverged { passes: u32 },
}

impl OptimizationWarning {
    pub fn severity(&self) -> WarningSeverity {
        match self {
            Self::LockedItemRestricted { .. } | Self::RefinementNotConverged { .. } => {
                WarningSeverity::Info
            }
            Self::NegativePointBudget { .. }
            | Self::LockedItemUnknownSlot { .. }
            | Self::LockedSlotFull { .. }
            | Self::InconsistentStatBudget { .. } => WarningSeverity::Validation,
        }
    }

    /// Stable identifier for the warning variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NegativePointBudget { .. } => "negative_point_budget",
            Self::LockedItemUnknownSlot { .. } => "locked_item_unknown_slot",
            Self::LockedSlotFull { .. } => "locked_slot_full",
            Self::LockedItemRestricted { .. } => "locked_item_restricted",
            Self::InconsistentStatBudget { .. } => "inconsistent_stat_budget",
            Self::RefinementNotConverged { .. } => "refinement_not_converged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_item() {
        let warning = OptimizationWarning::LockedSlotFull {
            name: "Lucky Ring".into(),
            slot: SlotKind::Ring,
        };
        assert_eq!(
            warning.to_string(),
            "locked item 'Lucky Ring' was ignored: every ring slot is already locked"
        );
        assert_eq!(warning.severity(), WarningSeverity::Validation);
        assert_eq!(warning.code(), "locked_slot_full");
    }

    #[test]
    fn restricted_lock_is_informational() {
        let warning = OptimizationWarning::LockedItemRestricted {
            name: "Staff".into(),
            class: HeroClass::Warrior,
            level: 3,
        };
        assert_eq!(warning.severity().as_str(), "info");
        assert!(warning.to_string().contains("level 3 warrior"));
    }
}
