//! Five-stat vector with arithmetic.
//!
//! `StatBlock` mirrors how the catalog stores stats: an object keyed by
//! upper-case stat names. Unspecified keys default to zero and malformed
//! values (NaN, non-numeric strings) deserialize as zero rather than failing.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use super::StatKind;

/// A value for each of the five stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "STR", default, deserialize_with = "lenient::stat_value")
    )]
    pub str: i32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "INT", default, deserialize_with = "lenient::stat_value")
    )]
    pub int: i32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "WIS", default, deserialize_with = "lenient::stat_value")
    )]
    pub wis: i32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CON", default, deserialize_with = "lenient::stat_value")
    )]
    pub con: i32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "DEX", default, deserialize_with = "lenient::stat_value")
    )]
    pub dex: i32,
}

impl StatBlock {
    /// All stats zero.
    pub const ZERO: StatBlock = StatBlock::splat(0);

    /// Create a block in canonical order (STR, INT, WIS, CON, DEX).
    pub const fn new(str: i32, int: i32, wis: i32, con: i32, dex: i32) -> Self {
        Self {
            str,
            int,
            wis,
            con,
            dex,
        }
    }

    /// Every stat set to `value`.
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value, value, value)
    }

    /// Read a single stat.
    pub const fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Str => self.str,
            StatKind::Int => self.int,
            StatKind::Wis => self.wis,
            StatKind::Con => self.con,
            StatKind::Dex => self.dex,
        }
    }

    /// Overwrite a single stat.
    pub fn set(&mut self, stat: StatKind, value: i32) {
        self[stat] = value;
    }

    /// Builder-style single stat override.
    #[must_use]
    pub fn with(mut self, stat: StatKind, value: i32) -> Self {
        self[stat] = value;
        self
    }

    /// Sum of all five stats, widened so large catalogs cannot overflow.
    pub fn sum(&self) -> i64 {
        StatKind::ALL.iter().map(|&s| i64::from(self.get(s))).sum()
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// True when every stat is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Apply `f` to each stat.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(StatKind, i32) -> i32) -> Self {
        let mut out = self;
        for stat in StatKind::ALL {
            out[stat] = f(stat, self.get(stat));
        }
        out
    }
}

impl Index<StatKind> for StatBlock {
    type Output = i32;

    fn index(&self, stat: StatKind) -> &i32 {
        match stat {
            StatKind::Str => &self.str,
            StatKind::Int => &self.int,
            StatKind::Wis => &self.wis,
            StatKind::Con => &self.con,
            StatKind::Dex => &self.dex,
        }
    }
}

impl IndexMut<StatKind> for StatBlock {
    fn index_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Str => &mut self.str,
            StatKind::Int => &mut self.int,
            StatKind::Wis => &mut self.wis,
            StatKind::Con => &mut self.con,
            StatKind::Dex => &mut self.dex,
        }
    }
}

impl Add for StatBlock {
    type Output = StatBlock;

    fn add(self, rhs: StatBlock) -> StatBlock {
        self.map(|stat, value| value.saturating_add(rhs.get(stat)))
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: StatBlock) {
        *self = *self + rhs;
    }
}

impl Sub for StatBlock {
    type Output = StatBlock;

    fn sub(self, rhs: StatBlock) -> StatBlock {
        self.map(|stat, value| value.saturating_sub(rhs.get(stat)))
    }
}

impl SubAssign for StatBlock {
    fn sub_assign(&mut self, rhs: StatBlock) {
        *self = *self - rhs;
    }
}

impl Neg for StatBlock {
    type Output = StatBlock;

    fn neg(self) -> StatBlock {
        self.map(|_, value| value.saturating_neg())
    }
}

impl<'a> core::iter::Sum<&'a StatBlock> for StatBlock {
    fn sum<I: Iterator<Item = &'a StatBlock>>(iter: I) -> StatBlock {
        iter.fold(StatBlock::ZERO, |acc, block| acc + *block)
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stat, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{stat} {value}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod lenient {
    //! Stat values come from hand-edited and scraped catalogs, so anything
    //! numeric-looking is accepted and everything else collapses to zero.

    use core::fmt;

    use serde::de::{self, Deserializer, Visitor};

    pub(super) fn stat_value<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StatValueVisitor)
    }

    fn from_float(value: f64) -> i32 {
        if value.is_finite() {
            // `as` saturates at the i32 bounds.
            value.trunc() as i32
        } else {
            0
        }
    }

    struct StatValueVisitor;

    impl<'de> Visitor<'de> for StatValueVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            Ok(v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            Ok(i32::try_from(v).unwrap_or(i32::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            Ok(from_float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            Ok(v.trim().parse::<f64>().map(from_float).unwrap_or(0))
        }

        fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<i32, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }
}
