//! The closed set of character attributes.

/// A character attribute.
///
/// The declaration order is the canonical order used for iteration, display
/// and tie-breaking: STR, INT, WIS, CON, DEX.
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
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum StatKind {
    /// Strength
    Str,
    /// Intelligence
    Int,
    /// Wisdom
    Wis,
    /// Constitution
    Con,
    /// Dexterity
    Dex,
}

impl StatKind {
    /// All stats in canonical order.
    pub const ALL: [StatKind; 5] = [
        StatKind::Str,
        StatKind::Int,
        StatKind::Wis,
        StatKind::Con,
        StatKind::Dex,
    ];

    /// Position of this stat in [`StatKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            StatKind::Str => 0,
            StatKind::Int => 1,
            StatKind::Wis => 2,
            StatKind::Con => 3,
            StatKind::Dex => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(StatKind::from_str("str").unwrap(), StatKind::Str);
        assert_eq!(StatKind::from_str("Wis").unwrap(), StatKind::Wis);
        assert_eq!(StatKind::from_str("DEX").unwrap(), StatKind::Dex);
        assert!(StatKind::from_str("luck").is_err());
    }

    #[test]
    fn displays_upper_case() {
        assert_eq!(StatKind::Con.to_string(), "CON");
        assert_eq!(StatKind::Int.as_ref(), "INT");
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, stat) in StatKind::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }
}
