//! Item level requirements.
//!
//! Catalog level fields are loosely typed: an integer, a float, the token
//! `"Master"`, a numeric string, or absent. All of them normalize to a plain
//! `u32` requirement without ever failing. Whole numbers stay whole so a
//! catalog written back out keeps `"level": 30`.

use core::fmt;

/// Requirement for `"Master"` items.
pub const MASTER_LEVEL: u32 = 99;

/// Requirement for items with a missing or unreadable level.
pub const DEFAULT_REQUIRED_LEVEL: u32 = 1;

/// Raw level field as stored in the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemLevel {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl ItemLevel {
    /// The `"Master"` token.
    pub fn master() -> Self {
        ItemLevel::Text("Master".to_string())
    }

    /// Normalized hero level needed to wear the item.
    pub fn requirement(&self) -> u32 {
        match self {
            ItemLevel::Integer(value) => from_integer(*value),
            ItemLevel::Number(value) => from_number(*value),
            ItemLevel::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("master") {
                    return MASTER_LEVEL;
                }
                match text.parse::<f64>() {
                    Ok(value) => from_number(value.trunc()),
                    Err(_) => DEFAULT_REQUIRED_LEVEL,
                }
            }
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self, ItemLevel::Text(text) if text.trim().eq_ignore_ascii_case("master"))
    }
}

fn from_integer(value: i64) -> u32 {
    if value < 1 {
        return DEFAULT_REQUIRED_LEVEL;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn from_number(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        return DEFAULT_REQUIRED_LEVEL;
    }
    // `as` saturates at u32::MAX.
    value.ceil() as u32
}

impl From<u32> for ItemLevel {
    fn from(level: u32) -> Self {
        ItemLevel::Integer(i64::from(level))
    }
}

impl fmt::Display for ItemLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemLevel::Integer(value) => write!(f, "{value}"),
            ItemLevel::Number(value) => write!(f, "{value}"),
            ItemLevel::Text(text) => f.write_str(text),
        }
    }
}

/// Requirement for an optional level field.
pub fn required_level(level: Option<&ItemLevel>) -> u32 {
    level.map_or(DEFAULT_REQUIRED_LEVEL, ItemLevel::requirement)
}

#[cfg(feature = "serde")]
mod lenient {
    //! Anything that is not a number or a string (booleans, objects, arrays)
    //! reads as the default requirement instead of failing the catalog.

    use core::fmt;

    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::{DEFAULT_REQUIRED_LEVEL, ItemLevel};

    impl<'de> Deserialize<'de> for ItemLevel {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ItemLevelVisitor)
        }
    }

    fn unreadable() -> ItemLevel {
        ItemLevel::from(DEFAULT_REQUIRED_LEVEL)
    }

    struct ItemLevelVisitor;

    impl<'de> Visitor<'de> for ItemLevelVisitor {
        type Value = ItemLevel;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a level number or text")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemLevel, E> {
            Ok(ItemLevel::Integer(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemLevel, E> {
            Ok(ItemLevel::Integer(i64::try_from(v).unwrap_or(i64::MAX)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<ItemLevel, E> {
            if v.is_finite() {
                Ok(ItemLevel::Number(v))
            } else {
                Ok(unreadable())
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemLevel, E> {
            Ok(ItemLevel::Text(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<ItemLevel, E> {
            Ok(ItemLevel::Text(v))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<ItemLevel, E> {
            Ok(unreadable())
        }

        fn visit_unit<E: de::Error>(self) -> Result<ItemLevel, E> {
            Ok(unreadable())
        }

        fn visit_none<E: de::Error>(self) -> Result<ItemLevel, E> {
            Ok(unreadable())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<ItemLevel, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ItemLevel, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(unreadable())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ItemLevel, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(unreadable())
        }
    }
}
