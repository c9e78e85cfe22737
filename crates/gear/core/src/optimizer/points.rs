//! Free stat point distribution.

use crate::item::HeroClass;
use crate::stats::StatBlock;

use super::cost::cost_order;
use super::deficit::deficit;

/// Where the free points went and what is still short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointAllocation {
    /// False when the budget ran out before every deficit was covered.
    pub success: bool,
    pub allocated: StatBlock,
    pub missing: StatBlock,
    /// Points left over once every deficit is covered.
    pub unspent: u32,
}

/// Spend `available_points` on the deficits of `stats` against `desired`,
/// most expensive stat first.
///
/// The first stat the budget cannot fully cover absorbs whatever is left;
/// every later stat gets nothing and its whole deficit is reported missing.
pub fn allocate_points(
    stats: &StatBlock,
    desired: &StatBlock,
    available_points: u32,
    class: HeroClass,
) -> PointAllocation {
    let shortfall = deficit(stats, desired).per_stat;
    let mut budget = available_points;
    let mut result = PointAllocation {
        success: true,
        ..PointAllocation::default()
    };

    for stat in cost_order(class) {
        let need = u32::try_from(shortfall[stat]).unwrap_or(0);
        if need == 0 {
            continue;
        }

        if budget >= need {
            result.allocated[stat] = shortfall[stat];
            budget -= need;
        } else {
            // `budget < need <= i32::MAX`, so both casts are lossless.
            result.allocated[stat] = budget as i32;
            result.missing[stat] = (need - budget) as i32;
            budget = 0;
            result.success = false;
        }
    }

    result.unspent = budget;
    result
}
