//! Data-driven content for the gear planner.
//!
//! This crate reads planner data from disk and hands `gear-core` plain values:
//! - Item catalogs (JSON or RON)
//! - Optimizer configuration (TOML)
//! - Build profiles: stats, class, level, locked items (TOML)
//! - Upstream equipment dumps, normalized into catalog items
//!
//! Nothing here takes part in optimization; the core never sees a file.

#[cfg(feature = "loaders")]
pub mod import;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use import::{
    DumpEquipment, DumpFile, ImportError, LevelReport, MergeReport, apply_levels, base_name,
    merge_into_catalog, normalize_record,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    BuildLoader, BuildProfile, CatalogLoader, ConfigLoader, ContentFactory, ItemCatalog,
    LoadResult,
};
