//! Equipment slots and their capacities.

/// An equipment category.
///
/// Declaration order is the order the allocator fills slots in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SlotKind {
    /// Older catalogs spell this slot `helmet`.
    #[strum(to_string = "helm", serialize = "helmet")]
    #[cfg_attr(feature = "serde", serde(alias = "helmet"))]
    Helm,
    Earring,
    Necklace,
    Armor,
    Weapon,
    Ring,
    Boot,
    Shield,
    Gauntlet,
    Greaves,
    Belt,
}

impl SlotKind {
    /// Number of slot kinds.
    pub const COUNT: usize = 11;

    /// All slots in fill order.
    pub const ALL: [SlotKind; Self::COUNT] = [
        SlotKind::Helm,
        SlotKind::Earring,
        SlotKind::Necklace,
        SlotKind::Armor,
        SlotKind::Weapon,
        SlotKind::Ring,
        SlotKind::Boot,
        SlotKind::Shield,
        SlotKind::Gauntlet,
        SlotKind::Greaves,
        SlotKind::Belt,
    ];

    /// How many items of this kind may be worn at once.
    pub const fn capacity(self) -> usize {
        match self {
            SlotKind::Ring | SlotKind::Gauntlet => 2,
            _ => 1,
        }
    }

    /// Position of this slot in [`SlotKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sum of all slot capacities.
    pub fn total_capacity() -> usize {
        Self::ALL.iter().map(|slot| slot.capacity()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn capacity_table() {
        assert_eq!(SlotKind::Ring.capacity(), 2);
        assert_eq!(SlotKind::Gauntlet.capacity(), 2);
        assert_eq!(SlotKind::Greaves.capacity(), 1);
        assert_eq!(SlotKind::total_capacity(), 13);
    }

    #[test]
    fn helmet_is_an_alias_for_helm() {
        assert_eq!(SlotKind::from_str("helmet").unwrap(), SlotKind::Helm);
        assert_eq!(SlotKind::from_str("HELM").unwrap(), SlotKind::Helm);
        assert_eq!(SlotKind::Helm.to_string(), "helm");
    }

    #[test]
    fn unknown_slot_does_not_parse() {
        assert!(SlotKind::from_str("overcoat").is_err());
    }

    #[test]
    fn index_matches_fill_order() {
        for (i, slot) in SlotKind::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
