//! Level/point consistency check.
//!
//! A level 1 character has 15 stat points in total and gains 2 per level.
//! Anything else means the caller typed in stats that cannot exist, except
//! at the level cap, where bonus sources push the total past the formula.

use crate::stats::StatBlock;

/// Total stat points of a level 1 character (3 in each stat).
pub const LEVEL_ONE_STAT_TOTAL: i64 = 15;

/// Stat points gained per level.
pub const POINTS_PER_LEVEL: i64 = 2;

/// Level from which over-allocation is expected.
pub const MAX_LEVEL: u32 = 99;

/// Stat total the leveling formula predicts for `level`.
pub fn expected_stat_total(level: u32) -> i64 {
    (i64::from(level) - 1) * POINTS_PER_LEVEL + LEVEL_ONE_STAT_TOTAL
}

/// Whether `base` plus `available_points` is consistent with `level`.
///
/// Below [`MAX_LEVEL`] the total must match the formula exactly; at or above
/// it the total must strictly exceed it.
pub fn validate_stats(level: u32, base: &StatBlock, available_points: i32) -> bool {
    let actual = base.sum() + i64::from(available_points);
    let expected = expected_stat_total(level);

    if level >= MAX_LEVEL {
        actual > expected
    } else {
        actual == expected
    }
}
