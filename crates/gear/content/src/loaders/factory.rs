//! Content factory for building optimizer inputs from a data directory.

use std::path::{Path, PathBuf};

use gear_core::{BuildRequest, Item, OptimizerConfig};

use crate::loaders::{BuildLoader, BuildProfile, CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads planner data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── items.json        (or items.ron)
/// ├── config.toml       (optional)
/// └── builds/
///     ├── tank.toml
///     └── caster.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the item catalog: `items.json`, falling back to `items.ron`.
    pub fn catalog_path(&self) -> PathBuf {
        let json = self.data_dir.join("items.json");
        if json.exists() {
            return json;
        }
        let ron = self.data_dir.join("items.ron");
        if ron.exists() { ron } else { json }
    }

    /// Load the item catalog.
    pub fn load_catalog(&self) -> LoadResult<Vec<Item>> {
        CatalogLoader::load(&self.catalog_path())
    }

    /// Load optimizer configuration from `config.toml`, or defaults if the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<OptimizerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(OptimizerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a build profile from `builds/{name}.toml`.
    pub fn load_build(&self, name: &str) -> LoadResult<BuildProfile> {
        let path = self.data_dir.join("builds").join(format!("{}.toml", name));
        BuildLoader::load(&path)
    }

    /// Load a build profile and resolve it against `catalog`.
    pub fn load_request(&self, name: &str, catalog: &[Item]) -> LoadResult<BuildRequest> {
        self.load_build(name)?
            .resolve(catalog)
            .map_err(|e| anyhow::anyhow!("Invalid build '{}': {}", name, e))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/gear-data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/gear-data"));
        assert_eq!(
            factory.catalog_path(),
            Path::new("/tmp/gear-data/items.json")
        );
    }
}
