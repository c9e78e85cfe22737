//! Upstream equipment dump importer.
//!
//! The game client ships its equipment table as `{ "equipment": [...] }`
//! records with free-form stat text and a class bitmask. This module turns
//! those records into catalog [`Item`]s, merges them into an existing catalog,
//! and back-fills level requirements.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use gear_core::{ClassRestriction, HeroClass, Item, ItemLevel, SlotKind, StatBlock, StatKind};
use serde::Deserialize;
use thiserror::Error;

use crate::loaders::{LoadResult, read_file};

static STAT_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

/// Deity variants share stats and level with their base item.
const GOD_PREFIXES: [&str; 5] = ["Cail", "Luathas", "Glioca", "Ceannlaidir", "Fiosachd"];

const COMMON_CLASS_MASK: i64 = 1;

const CLASS_BITS: [(i64, HeroClass); 5] = [
    (2, HeroClass::Warrior),
    (4, HeroClass::Rogue),
    (8, HeroClass::Wizard),
    (16, HeroClass::Priest),
    (32, HeroClass::Monk),
];

/// Record-level import failures. Skipped records carry one of these.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("'{name}' has no stats")]
    NoStats { name: String },

    #[error("'{name}' has no non-zero STR/INT/WIS/CON/DEX stat")]
    NoRelevantStats { name: String },

    #[error("'{name}' uses unsupported slot '{slot}'")]
    UnsupportedSlot { name: String, slot: String },

    #[error("invalid dump JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Number field that the dump writes as either a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    /// Leading integer, like a lenient `parseInt`. `None` if there is none.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            LooseNumber::Int(value) => Some(*value),
            LooseNumber::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            LooseNumber::Float(_) => None,
            LooseNumber::Text(text) => leading_int(text),
        }
    }
}

fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// A raw equipment record from the dump.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DumpEquipment {
    pub name: String,
    /// Free-form stat text, e.g. `"Str +3, Con -1, AC -2"`.
    pub stats: Option<String>,
    pub equipment_slot: Option<String>,
    pub allowed_classes: Option<LooseNumber>,
    pub level_required: Option<LooseNumber>,
    pub level_display: Option<String>,
}

impl DumpEquipment {
    /// Catalog slot for the record, if the planner models it.
    pub fn slot(&self) -> Option<SlotKind> {
        match self.equipment_slot.as_deref()?.trim() {
            "Necklace" => Some(SlotKind::Necklace),
            "Helmet" => Some(SlotKind::Helm),
            "Weapon" => Some(SlotKind::Weapon),
            "Armor" | "OverCoat" => Some(SlotKind::Armor),
            "Shield" => Some(SlotKind::Shield),
            "RHand" | "LHand" => Some(SlotKind::Ring),
            "Earring" => Some(SlotKind::Earring),
            "Waist" => Some(SlotKind::Belt),
            "Boot" | "Foot" => Some(SlotKind::Boot),
            "Leg" => Some(SlotKind::Greaves),
            "RArm" | "LArm" => Some(SlotKind::Gauntlet),
            _ => None,
        }
    }

    /// Classes allowed by the bitmask. A single `All` entry stands for
    /// every class; otherwise one entry per class bit.
    pub fn classes(&self) -> Vec<ClassRestriction> {
        let mask = self
            .allowed_classes
            .as_ref()
            .and_then(LooseNumber::as_int)
            .unwrap_or(0);
        if mask == COMMON_CLASS_MASK {
            return vec![ClassRestriction::All];
        }

        let classes: Vec<ClassRestriction> = CLASS_BITS
            .iter()
            .filter(|(bit, _)| mask & bit != 0)
            .map(|&(_, class)| ClassRestriction::Only(class))
            .collect();

        if classes.is_empty() || classes.len() == CLASS_BITS.len() {
            vec![ClassRestriction::All]
        } else {
            classes
        }
    }

    /// Level requirement: `"Master"` for master items, else the positive
    /// required level, else 1.
    pub fn level(&self) -> ItemLevel {
        let display = self.level_display.as_deref().map(str::trim);
        if matches!(display, Some("Master" | "Maste")) {
            return ItemLevel::master();
        }
        match self.level_required.as_ref().and_then(LooseNumber::as_int) {
            Some(level) if level > 0 => ItemLevel::from(u32::try_from(level).unwrap_or(u32::MAX)),
            _ => ItemLevel::from(1),
        }
    }

    /// Parse the stat text. Later mentions of a stat override earlier ones;
    /// zero values are ignored.
    pub fn parsed_stats(&self) -> Result<StatBlock, ImportError> {
        let text = match self.stats.as_deref().map(str::trim) {
            None | Some("") | Some("-") => {
                return Err(ImportError::NoStats {
                    name: self.name.clone(),
                });
            }
            Some(text) => text,
        };

        let re = STAT_REGEX.get_or_init(|| {
            regex_lite::Regex::new(r"(?i)(Str|Int|Wis|Con|Dex)\s*([+-]?\d+)")
                .expect("STAT_REGEX pattern is invalid")
        });

        let mut stats = StatBlock::ZERO;
        let mut found = false;
        for caps in re.captures_iter(text) {
            let Ok(stat) = caps[1].parse::<StatKind>() else {
                continue;
            };
            let value = caps[2].parse::<i32>().unwrap_or(0);
            if value != 0 {
                stats[stat] = value;
                found = true;
            }
        }

        if found {
            Ok(stats)
        } else {
            Err(ImportError::NoRelevantStats {
                name: self.name.clone(),
            })
        }
    }
}

/// Top-level dump document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DumpFile {
    #[serde(default)]
    pub equipment: Vec<DumpEquipment>,
}

impl DumpFile {
    pub fn parse(content: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let dump = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dump {}: {}", path.display(), e))?;
        tracing::info!(
            "Loaded {} equipment records from {}",
            dump.equipment.len(),
            path.display()
        );
        Ok(dump)
    }
}

/// Convert one dump record into catalog items, one per allowed class.
pub fn normalize_record(record: &DumpEquipment) -> Result<Vec<Item>, ImportError> {
    let stats = record.parsed_stats()?;
    let slot = record.slot().ok_or_else(|| ImportError::UnsupportedSlot {
        name: record.name.clone(),
        slot: record.equipment_slot.clone().unwrap_or_default(),
    })?;
    let level = record.level();

    Ok(record
        .classes()
        .into_iter()
        .map(|class| Item::new(record.name.clone(), slot, class, stats).with_level(level.clone()))
        .collect())
}

/// Outcome of [`merge_into_catalog`].
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Names of appended items, once per catalog entry added.
    pub added: Vec<String>,
    /// Records whose name the catalog already had.
    pub duplicates: usize,
    /// Records that could not be normalized.
    pub skipped: Vec<ImportError>,
}

/// Append normalized records whose name is not already in `catalog`.
///
/// Only names present before the merge count as duplicates, so multi-class
/// records still fan out into one entry per class.
pub fn merge_into_catalog(catalog: &mut Vec<Item>, records: &[DumpEquipment]) -> MergeReport {
    let existing: HashSet<String> = catalog.iter().map(|item| item.name.clone()).collect();
    let mut report = MergeReport::default();

    for record in records {
        if existing.contains(&record.name) {
            report.duplicates += 1;
            continue;
        }
        match normalize_record(record) {
            Ok(items) => {
                report
                    .added
                    .extend(items.iter().map(|item| item.name.clone()));
                catalog.extend(items);
            }
            Err(err) => {
                tracing::debug!("Skipping dump record: {}", err);
                report.skipped.push(err);
            }
        }
    }

    tracing::info!(
        "Merged dump: {} added, {} duplicates, {} skipped",
        report.added.len(),
        report.duplicates,
        report.skipped.len()
    );
    report
}

/// Name with any god prefix removed, lowercased for matching.
pub fn base_name(name: &str) -> String {
    let stripped = GOD_PREFIXES
        .iter()
        .find_map(|prefix| {
            name.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(' '))
        })
        .unwrap_or(name);
    stripped.to_lowercase()
}

/// Outcome of [`apply_levels`].
#[derive(Debug, Default)]
pub struct LevelReport {
    pub updated: usize,
    /// Catalog items with no dump match; these were set to level 1.
    pub defaulted: Vec<String>,
}

/// Set every catalog item's level from the first dump record sharing its
/// base name. Unmatched items get level 1.
pub fn apply_levels(catalog: &mut [Item], records: &[DumpEquipment]) -> LevelReport {
    let mut by_base: HashMap<String, &DumpEquipment> = HashMap::new();
    for record in records {
        by_base.entry(base_name(&record.name)).or_insert(record);
    }

    let mut report = LevelReport::default();
    for item in catalog.iter_mut() {
        match by_base.get(&base_name(&item.name)) {
            Some(record) => {
                item.level = Some(record.level());
                report.updated += 1;
            }
            None => {
                item.level = Some(ItemLevel::from(1));
                report.defaulted.push(item.name.clone());
            }
        }
    }

    tracing::info!(
        "Applied levels: {} updated, {} defaulted to 1",
        report.updated,
        report.defaulted.len()
    );
    report
}
