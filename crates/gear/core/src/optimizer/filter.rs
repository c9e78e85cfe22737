//! Candidate filtering by class and level.

use crate::item::{HeroClass, Item, SlotKind};

/// Items from `catalog` that a `class` hero at `level` could equip.
///
/// Items with an unknown slot or class tag are dropped rather than reported.
/// The catalog is only borrowed.
pub fn filter_candidates(catalog: &[Item], class: HeroClass, level: u32) -> Vec<&Item> {
    catalog
        .iter()
        .filter(|item| item.slot_kind().is_some() && item.usable_by(class, level))
        .collect()
}

/// Candidates grouped by slot, preserving catalog order within each slot.
#[derive(Clone, Debug)]
pub struct CandidatePool<'a> {
    by_slot: [Vec<&'a Item>; SlotKind::COUNT],
}

impl<'a> CandidatePool<'a> {
    pub fn new(candidates: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut by_slot: [Vec<&'a Item>; SlotKind::COUNT] =
            core::array::from_fn(|_| Vec::new());
        for item in candidates {
            if let Some(slot) = item.slot_kind() {
                by_slot[slot.index()].push(item);
            }
        }
        Self { by_slot }
    }

    /// Filter `catalog` and group the survivors.
    pub fn from_catalog(catalog: &'a [Item], class: HeroClass, level: u32) -> Self {
        Self::new(filter_candidates(catalog, class, level))
    }

    pub fn for_slot(&self, slot: SlotKind) -> &[&'a Item] {
        &self.by_slot[slot.index()]
    }

    pub fn len(&self) -> usize {
        self.by_slot.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
