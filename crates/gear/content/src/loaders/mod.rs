//! Content loaders for reading planner data from files.
//!
//! This module provides loaders that convert JSON/RON/TOML files into
//! `gear-core` values.

pub mod build;
pub mod catalog;
pub mod config;
pub mod factory;

pub use build::{BuildLoader, BuildProfile};
pub use catalog::{CatalogLoader, ItemCatalog};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Helper function to write file contents.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
