//! Catalog items and their typed views.
//!
//! An [`Item`] keeps its `type`, `class`, and `level` fields exactly as the
//! catalog provides them. The typed accessors ([`Item::slot_kind`],
//! [`Item::class_restriction`], [`Item::required_level`]) are total: an
//! unknown tag yields `None` (or the default level) and the item simply never
//! becomes a candidate.

pub mod class;
pub mod level;
pub mod slot;

pub use class::{ClassRestriction, HeroClass};
pub use level::{DEFAULT_REQUIRED_LEVEL, ItemLevel, MASTER_LEVEL, required_level};
pub use slot::SlotKind;

use core::str::FromStr;

use crate::stats::StatBlock;

/// A read-only catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Slot tag, e.g. `"ring"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub slot: String,
    /// Class tag, e.g. `"wizard"` or `"all"`.
    pub class: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub level: Option<ItemLevel>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        slot: SlotKind,
        class: impl Into<ClassRestriction>,
        stats: StatBlock,
    ) -> Self {
        Self {
            name: name.into(),
            slot: slot.to_string(),
            class: class.into().to_string(),
            stats,
            level: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<ItemLevel>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn slot_kind(&self) -> Option<SlotKind> {
        SlotKind::from_str(self.slot.trim()).ok()
    }

    pub fn class_restriction(&self) -> Option<ClassRestriction> {
        ClassRestriction::parse(&self.class)
    }

    pub fn required_level(&self) -> u32 {
        required_level(self.level.as_ref())
    }

    /// Whether a hero of `class` at `level` may wear this item.
    pub fn usable_by(&self, class: HeroClass, level: u32) -> bool {
        self.class_restriction()
            .is_some_and(|restriction| restriction.allows(class))
            && level >= self.required_level()
    }
}

/// An item placed in a slot by the optimizer (or pinned by the caller).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquippedItem {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: Item,
    pub slot: SlotKind,
    #[cfg_attr(feature = "serde", serde(rename = "isLocked"))]
    pub locked: bool,
}

impl EquippedItem {
    pub fn name(&self) -> &str {
        &self.item.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(class: &str) -> Item {
        Item {
            name: "Ring".into(),
            slot: "Ring".into(),
            class: class.into(),
            stats: StatBlock::ZERO,
            level: None,
        }
    }

    #[test]
    fn typed_views_are_total() {
        let mut item = ring("all");
        assert_eq!(item.slot_kind(), Some(SlotKind::Ring));
        assert_eq!(item.class_restriction(), Some(ClassRestriction::All));

        item.slot = "cape".into();
        item.class = "bard".into();
        assert_eq!(item.slot_kind(), None);
        assert_eq!(item.class_restriction(), None);
    }

    #[test]
    fn usable_by_checks_class_and_level() {
        let item = ring("Wizard").with_level(20);
        assert!(item.usable_by(HeroClass::Wizard, 20));
        assert!(!item.usable_by(HeroClass::Wizard, 19));
        assert!(!item.usable_by(HeroClass::Priest, 50));
        assert!(!ring("bard").usable_by(HeroClass::Priest, 99));
    }

    #[test]
    fn constructor_writes_catalog_tags() {
        let item = Item::new("Cap", SlotKind::Helm, HeroClass::Monk, StatBlock::ZERO);
        assert_eq!(item.slot, "helm");
        assert_eq!(item.class, "monk");

        let any = Item::new("Band", SlotKind::Ring, ClassRestriction::All, StatBlock::ZERO);
        assert_eq!(any.class, "all");
    }
}
