//! Optimizer configuration loader.

use std::path::Path;

use gear_core::OptimizerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for optimizer configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<OptimizerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<OptimizerConfig> {
        let config: OptimizerConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("refinement_passes = 4\n").unwrap();
        assert_eq!(config.refinement_passes, 4);
        assert!(config.check_stat_budget);

        let empty = ConfigLoader::parse("").unwrap();
        assert_eq!(empty, OptimizerConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("refinement_passes = \"many\"").is_err());
    }
}
