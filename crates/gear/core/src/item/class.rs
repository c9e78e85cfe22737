//! Hero classes and item class restrictions.

use core::fmt;
use core::str::FromStr;

use crate::stats::StatKind;

/// A playable class.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HeroClass {
    Warrior,
    Rogue,
    Wizard,
    Priest,
    Monk,
}

impl HeroClass {
    pub const ALL: [HeroClass; 5] = [
        HeroClass::Warrior,
        HeroClass::Rogue,
        HeroClass::Wizard,
        HeroClass::Priest,
        HeroClass::Monk,
    ];

    /// Stats this class raises cheaply.
    pub const fn primary_stats(self) -> &'static [StatKind] {
        match self {
            HeroClass::Warrior => &[StatKind::Str, StatKind::Con],
            HeroClass::Rogue => &[StatKind::Str, StatKind::Dex],
            HeroClass::Wizard | HeroClass::Priest => &[StatKind::Wis, StatKind::Int],
            HeroClass::Monk => &[StatKind::Str, StatKind::Int, StatKind::Con],
        }
    }

    pub fn is_primary(self, stat: StatKind) -> bool {
        self.primary_stats().contains(&stat)
    }
}

/// Which classes may wear an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassRestriction {
    /// Wearable by every class.
    All,
    /// Wearable by a single class.
    Only(HeroClass),
}

impl ClassRestriction {
    /// Parse a catalog class tag. Returns `None` for tags outside the
    /// vocabulary so callers can drop the item instead of failing.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("all") {
            return Some(ClassRestriction::All);
        }
        HeroClass::from_str(tag).ok().map(ClassRestriction::Only)
    }

    pub fn allows(self, class: HeroClass) -> bool {
        match self {
            ClassRestriction::All => true,
            ClassRestriction::Only(only) => only == class,
        }
    }
}

impl From<HeroClass> for ClassRestriction {
    fn from(class: HeroClass) -> Self {
        ClassRestriction::Only(class)
    }
}

impl fmt::Display for ClassRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassRestriction::All => f.write_str("all"),
            ClassRestriction::Only(class) => write!(f, "{class}"),
        }
    }
}
