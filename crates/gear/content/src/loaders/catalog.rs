//! Item catalog loader.
//!
//! Catalogs are normally JSON (`{ "items": [...] }`, or a bare array), with
//! RON accepted for hand-written test data. The format is picked from the
//! file extension.

use std::path::Path;

use gear_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, write_file};

/// Item catalog structure for catalog files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped(ItemCatalog),
    Bare(Vec<Item>),
}

/// Loader for item catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a `.json` or `.ron` file.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        let items = match extension(path).as_deref() {
            Some("ron") => Self::parse_ron(&content),
            _ => Self::parse_json(&content),
        }
        .map_err(|e| anyhow::anyhow!("Failed to parse item catalog {}: {}", path.display(), e))?;

        tracing::info!("Loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    pub fn parse_json(content: &str) -> LoadResult<Vec<Item>> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(match file {
            CatalogFile::Wrapped(catalog) => catalog.items,
            CatalogFile::Bare(items) => items,
        })
    }

    pub fn parse_ron(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)?;
        Ok(catalog.items)
    }

    /// Write `items` back in the format the extension names (`.ron` or JSON).
    pub fn save(path: &Path, items: &[Item]) -> LoadResult<()> {
        match extension(path).as_deref() {
            Some("ron") => Self::save_ron(path, items),
            _ => Self::save_json(path, items),
        }
    }

    pub fn save_ron(path: &Path, items: &[Item]) -> LoadResult<()> {
        let catalog = ItemCatalog {
            items: items.to_vec(),
        };
        let text = ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize item catalog: {}", e))?;
        write_file(path, &text)?;

        tracing::info!("Saved {} items to {}", items.len(), path.display());
        Ok(())
    }

    /// Write `items` as a pretty-printed `{ "items": [...] }` JSON catalog.
    pub fn save_json(path: &Path, items: &[Item]) -> LoadResult<()> {
        let catalog = ItemCatalog {
            items: items.to_vec(),
        };
        let json = serde_json::to_string_pretty(&catalog)
            .map_err(|e| anyhow::anyhow!("Failed to serialize item catalog: {}", e))?;
        write_file(path, &json)?;

        tracing::info!("Saved {} items to {}", items.len(), path.display());
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
