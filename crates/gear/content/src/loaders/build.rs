//! Build profile loader.
//!
//! A build profile is the character half of an optimizer request:
//!
//! ```toml
//! class = "warrior"
//! level = 45
//! points = 6
//! locked = ["Magus Ring"]
//!
//! [base]
//! STR = 20
//! CON = 18
//!
//! [desired]
//! STR = 30
//! CON = 25
//! ```

use std::path::Path;
use std::str::FromStr;

use gear_core::{BuildRequest, HeroClass, Item, StatBlock};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Build profile as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildProfile {
    pub class: String,
    pub level: u32,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub base: StatBlock,
    #[serde(default)]
    pub desired: StatBlock,
    /// Catalog item names pinned before the search.
    #[serde(default)]
    pub locked: Vec<String>,
}

impl BuildProfile {
    /// Turn the profile into a request, looking locked names up in `catalog`.
    pub fn resolve(&self, catalog: &[Item]) -> LoadResult<BuildRequest> {
        let class = HeroClass::from_str(self.class.trim())
            .map_err(|_| anyhow::anyhow!("Unknown class '{}'", self.class))?;

        let locked = self
            .locked
            .iter()
            .map(|name| {
                find_by_name(catalog, name)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Locked item '{}' not found in catalog", name))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(BuildRequest::new(class, self.level)
            .with_base(self.base)
            .with_desired(self.desired)
            .with_points(self.points)
            .with_locked(locked))
    }
}

fn find_by_name<'a>(catalog: &'a [Item], name: &str) -> Option<&'a Item> {
    let name = name.trim();
    catalog
        .iter()
        .find(|item| item.name.trim().eq_ignore_ascii_case(name))
}

/// Loader for build profiles from TOML files.
pub struct BuildLoader;

impl BuildLoader {
    pub fn load(path: &Path) -> LoadResult<BuildProfile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BuildProfile> {
        let profile: BuildProfile = toml::from_str(content)?;
        Ok(profile)
    }
}
