//! Slot allocation: greedy fill followed by coordinate descent.
//!
//! Slots are flattened into one instance per capacity unit (two rings, two
//! gauntlets, one of everything else) minus whatever the caller locked.
//!
//! # Phases
//!
//! 1. **Greedy construction**: walk slot instances in fill order and give
//!    each the candidate that most improves the running build, or nothing if
//!    no candidate strictly beats leaving it empty.
//! 2. **Coordinate descent**: re-pick every slot with all other slots held
//!    fixed, until a full pass changes nothing or the pass cap is reached.
//!
//! Every single-slot re-pick considers the current choice too, so the build
//! score never gets worse between passes. The result is a local optimum.

use core::ptr;

use crate::item::{EquippedItem, HeroClass, Item, SlotKind};
use crate::stats::StatBlock;
use crate::warning::OptimizationWarning;

use super::cost::{BuildScore, score_build};
use super::filter::CandidatePool;

/// Caller-locked items folded into the starting state.
#[derive(Clone, Debug)]
pub struct LockedLayout {
    /// Base stats plus every accepted locked item.
    pub baseline: StatBlock,
    /// Accepted locked items, flagged as locked.
    pub equipped: Vec<EquippedItem>,
    remaining: [usize; SlotKind::COUNT],
}

impl LockedLayout {
    /// Seat `locked` items on top of `base`.
    ///
    /// Items with an unknown slot tag, or whose slot is already full, are
    /// ignored and reported in `warnings`. Items the hero could not normally
    /// wear are still seated, with an informational warning.
    pub fn build(
        base: &StatBlock,
        locked: &[Item],
        class: HeroClass,
        level: u32,
        warnings: &mut Vec<OptimizationWarning>,
    ) -> Self {
        let mut remaining = SlotKind::ALL.map(SlotKind::capacity);
        let mut baseline = *base;
        let mut equipped = Vec::with_capacity(locked.len());

        for item in locked {
            let Some(slot) = item.slot_kind() else {
                warnings.push(OptimizationWarning::LockedItemUnknownSlot {
                    name: item.name.clone(),
                    slot: item.slot.clone(),
                });
                continue;
            };

            if remaining[slot.index()] == 0 {
                warnings.push(OptimizationWarning::LockedSlotFull {
                    name: item.name.clone(),
                    slot,
                });
                continue;
            }

            if !item.usable_by(class, level) {
                warnings.push(OptimizationWarning::LockedItemRestricted {
                    name: item.name.clone(),
                    class,
                    level,
                });
            }

            remaining[slot.index()] -= 1;
            baseline += item.stats;
            equipped.push(EquippedItem {
                item: item.clone(),
                slot,
                locked: true,
            });
        }

        Self {
            baseline,
            equipped,
            remaining,
        }
    }

    /// Capacity left for `slot` after locking.
    pub fn remaining(&self, slot: SlotKind) -> usize {
        self.remaining[slot.index()]
    }

    /// Open slot instances in fill order.
    pub fn open_slots(&self) -> Vec<SlotKind> {
        SlotKind::ALL
            .iter()
            .flat_map(|&slot| core::iter::repeat_n(slot, self.remaining(slot)))
            .collect()
    }
}

/// Outcome of a slot search.
#[derive(Clone, Debug)]
pub struct Allocation<'a> {
    /// Stats the search started from (base + locked items).
    pub baseline: StatBlock,
    /// Open slot instances, parallel to `chosen`.
    pub slots: Vec<SlotKind>,
    /// Item picked for each slot instance.
    pub chosen: Vec<Option<&'a Item>>,
    /// Build score after the greedy phase, then after each refinement pass.
    pub history: Vec<BuildScore>,
    /// Refinement passes executed.
    pub passes: u32,
    /// Whether the last pass changed nothing.
    pub converged: bool,
}

impl<'a> Allocation<'a> {
    /// Baseline plus every chosen item.
    pub fn stats(&self) -> StatBlock {
        self.chosen
            .iter()
            .flatten()
            .fold(self.baseline, |acc, item| acc + item.stats)
    }

    /// Chosen items with their slot, in fill order.
    pub fn equipped(&self) -> impl Iterator<Item = (SlotKind, &'a Item)> + '_ {
        self.slots
            .iter()
            .zip(&self.chosen)
            .filter_map(|(&slot, item)| item.map(|item| (slot, item)))
    }

    /// Final build score.
    pub fn score(&self) -> Option<BuildScore> {
        self.history.last().copied()
    }
}

/// Two-phase local search over open slot instances.
pub struct SlotAllocator<'p, 'a> {
    pool: &'p CandidatePool<'a>,
    desired: StatBlock,
    available_points: u32,
    class: HeroClass,
    baseline: StatBlock,
    slots: Vec<SlotKind>,
}

impl<'p, 'a> SlotAllocator<'p, 'a> {
    pub fn new(
        pool: &'p CandidatePool<'a>,
        desired: StatBlock,
        available_points: u32,
        class: HeroClass,
        baseline: StatBlock,
        slots: Vec<SlotKind>,
    ) -> Self {
        Self {
            pool,
            desired,
            available_points,
            class,
            baseline,
            slots,
        }
    }

    /// Run both phases with at most `max_passes` refinement passes.
    pub fn run(self, max_passes: u32) -> Allocation<'a> {
        let mut chosen = self.greedy_fill();
        let mut history = vec![self.score(&self.stats_with(&chosen, None))];

        tracing::debug!(
            "Greedy fill: {} of {} slots filled, score={:?}",
            chosen.iter().flatten().count(),
            self.slots.len(),
            history[0]
        );

        let mut passes = 0;
        let mut converged = false;
        while passes < max_passes {
            passes += 1;
            let changed = self.refine_pass(&mut chosen);
            let score = self.score(&self.stats_with(&chosen, None));

            tracing::debug!(
                "Refinement pass {}: {} slot(s) changed, score={:?}",
                passes,
                changed,
                score
            );

            history.push(score);
            if changed == 0 {
                converged = true;
                break;
            }
        }

        Allocation {
            baseline: self.baseline,
            slots: self.slots,
            chosen,
            history,
            passes,
            converged,
        }
    }

    fn greedy_fill(&self) -> Vec<Option<&'a Item>> {
        let mut running = self.baseline;
        let mut chosen = Vec::with_capacity(self.slots.len());

        for &slot in &self.slots {
            let pick = self.best_for(slot, &running);
            if let Some(item) = pick {
                running += item.stats;
            }
            chosen.push(pick);
        }

        chosen
    }

    /// One coordinate-descent pass. Returns how many slots changed.
    fn refine_pass(&self, chosen: &mut [Option<&'a Item>]) -> usize {
        let mut changed = 0;

        for (index, &slot) in self.slots.iter().enumerate() {
            let others = self.stats_with(chosen, Some(index));
            let pick = self.best_for(slot, &others);
            if !same_choice(pick, chosen[index]) {
                chosen[index] = pick;
                changed += 1;
            }
        }

        changed
    }

    /// Best candidate for `slot` on top of `stats`, or `None` when nothing
    /// strictly beats leaving the slot empty. Ties keep the earlier option.
    fn best_for(&self, slot: SlotKind, stats: &StatBlock) -> Option<&'a Item> {
        let mut best = None;
        let mut best_score = self.score(stats);

        for &item in self.pool.for_slot(slot) {
            let score = self.score(&(*stats + item.stats));
            if score.is_better_than(&best_score) {
                best = Some(item);
                best_score = score;
            }
        }

        best
    }

    /// Baseline plus every chosen item except the one at `skip`.
    fn stats_with(&self, chosen: &[Option<&'a Item>], skip: Option<usize>) -> StatBlock {
        chosen
            .iter()
            .enumerate()
            .filter(|&(index, _)| Some(index) != skip)
            .filter_map(|(_, item)| *item)
            .fold(self.baseline, |acc, item| acc + item.stats)
    }

    fn score(&self, stats: &StatBlock) -> BuildScore {
        score_build(stats, &self.desired, self.available_points, self.class)
    }
}

/// Identity comparison: two catalog entries with equal contents are still
/// different choices.
fn same_choice(a: Option<&Item>, b: Option<&Item>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ClassRestriction;
    use crate::stats::StatKind;

    fn item(name: &str, slot: SlotKind, stats: StatBlock) -> Item {
        Item::new(name, slot, ClassRestriction::All, stats)
    }

    fn allocate<'a>(
        pool: &CandidatePool<'a>,
        base: StatBlock,
        desired: StatBlock,
        points: u32,
    ) -> Allocation<'a> {
        let mut warnings = Vec::new();
        let layout = LockedLayout::build(&base, &[], HeroClass::Warrior, 99, &mut warnings);
        SlotAllocator::new(
            pool,
            desired,
            points,
            HeroClass::Warrior,
            layout.baseline,
            layout.open_slots(),
        )
        .run(10)
    }

    #[test]
    fn open_slots_follow_capacity_table() {
        let mut warnings = Vec::new();
        let layout = LockedLayout::build(&StatBlock::ZERO, &[], HeroClass::Monk, 1, &mut warnings);
        let slots = layout.open_slots();

        assert_eq!(slots.len(), SlotKind::total_capacity());
        assert_eq!(slots[0], SlotKind::Helm);
        assert_eq!(slots.iter().filter(|&&s| s == SlotKind::Ring).count(), 2);
        assert_eq!(slots.iter().filter(|&&s| s == SlotKind::Gauntlet).count(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn locking_consumes_capacity_and_adds_stats() {
        let locked = vec![
            item("Ring A", SlotKind::Ring, StatBlock::new(2, 0, 0, 0, 0)),
            item("Ring B", SlotKind::Ring, StatBlock::new(0, 3, 0, 0, 0)),
            item("Ring C", SlotKind::Ring, StatBlock::new(0, 0, 9, 0, 0)),
        ];
        let mut warnings = Vec::new();
        let layout = LockedLayout::build(
            &StatBlock::splat(1),
            &locked,
            HeroClass::Monk,
            1,
            &mut warnings,
        );

        assert_eq!(layout.remaining(SlotKind::Ring), 0);
        assert_eq!(layout.baseline, StatBlock::new(3, 4, 1, 1, 1));
        assert_eq!(layout.equipped.len(), 2);
        assert!(layout.equipped.iter().all(|e| e.locked));
        assert_eq!(
            warnings,
            vec![OptimizationWarning::LockedSlotFull {
                name: "Ring C".into(),
                slot: SlotKind::Ring,
            }]
        );
    }

    #[test]
    fn unknown_locked_slot_is_ignored() {
        let mut cape = item("Cape", SlotKind::Armor, StatBlock::splat(5));
        cape.slot = "cape".into();

        let mut warnings = Vec::new();
        let layout =
            LockedLayout::build(&StatBlock::ZERO, &[cape], HeroClass::Rogue, 10, &mut warnings);

        assert_eq!(layout.baseline, StatBlock::ZERO);
        assert!(layout.equipped.is_empty());
        assert!(matches!(
            warnings.as_slice(),
            [OptimizationWarning::LockedItemUnknownSlot { .. }]
        ));
    }

    #[test]
    fn greedy_picks_the_item_that_closes_the_gap() {
        let catalog = vec![
            item("Iron Helm", SlotKind::Helm, StatBlock::new(2, 0, 0, 0, 0)),
            item("Sage Helm", SlotKind::Helm, StatBlock::new(0, 4, 0, 0, 0)),
        ];
        let pool = CandidatePool::new(&catalog);
        let desired = StatBlock::splat(10).with(StatKind::Int, 14);

        let allocation = allocate(&pool, StatBlock::splat(10), desired, 0);
        let picked: Vec<_> = allocation.equipped().map(|(_, i)| i.name.as_str()).collect();

        assert_eq!(picked, ["Sage Helm"]);
        assert!(allocation.converged);
    }

    #[test]
    fn empty_pool_leaves_every_slot_empty() {
        let catalog: Vec<Item> = Vec::new();
        let pool = CandidatePool::new(&catalog);

        let allocation = allocate(&pool, StatBlock::splat(10), StatBlock::splat(20), 5);
        assert_eq!(allocation.equipped().count(), 0);
        assert_eq!(allocation.stats(), StatBlock::splat(10));
        assert_eq!(allocation.passes, 1);
        assert!(allocation.converged);
    }

    #[test]
    fn refinement_fixes_a_greedy_misstep() {
        // Greedy fills the helm first with the INT+DEX helm since DEX is also
        // short, then the weapon. A helm with only DEX plus the INT weapon
        // covers everything; refinement finds it.
        let catalog = vec![
            item("Mixed Helm", SlotKind::Helm, StatBlock::new(0, 3, 0, 0, 3)),
            item("Dex Helm", SlotKind::Helm, StatBlock::new(0, 0, 0, 0, 4)),
            item("Int Blade", SlotKind::Weapon, StatBlock::new(0, 4, 0, 0, 0)),
        ];
        let pool = CandidatePool::new(&catalog);
        let desired = StatBlock::new(10, 14, 10, 10, 14);

        let allocation = allocate(&pool, StatBlock::splat(10), desired, 0);
        let picked: Vec<_> = allocation.equipped().map(|(_, i)| i.name.as_str()).collect();

        assert_eq!(picked, ["Dex Helm", "Int Blade"]);
        let first = allocation.history[0];
        let last = allocation.score().unwrap();
        assert!(last <= first);
        assert_eq!(last.exp.missing, 0);
    }

    #[test]
    fn history_is_monotonic_and_bounded() {
        let catalog: Vec<Item> = (0..6)
            .flat_map(|i| {
                SlotKind::ALL.map(|slot| {
                    item(
                        &format!("{slot}-{i}"),
                        slot,
                        StatBlock::new(i - 2, 3 - i, i % 3, 1, -(i % 2)),
                    )
                })
            })
            .collect();
        let pool = CandidatePool::new(&catalog);

        let allocation = allocate(&pool, StatBlock::splat(8), StatBlock::new(20, 12, 15, 18, 9), 6);

        assert!(allocation.passes <= 10);
        assert!(allocation.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn same_choice_is_identity() {
        let a = item("Band", SlotKind::Ring, StatBlock::ZERO);
        let b = a.clone();

        assert!(same_choice(Some(&a), Some(&a)));
        assert!(!same_choice(Some(&a), Some(&b)));
        assert!(same_choice(None, None));
        assert!(!same_choice(Some(&a), None));
    }
}
