//! Environment overrides for the planner CLI.
use std::env;
use std::path::PathBuf;

use gear_core::OptimizerConfig;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, Default)]
pub struct PlannerConfig {
    /// Data directory used when `--data` is not given.
    pub data_dir: Option<PathBuf>,

    /// Overrides `refinement_passes` from `config.toml`.
    pub refinement_passes: Option<u32>,
}

impl PlannerConfig {
    /// Construct planner configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GEAR_DATA_DIR` - Data directory (default: `data`)
    /// - `GEAR_REFINEMENT_PASSES` - Refinement pass cap (default: from `config.toml`)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("GEAR_DATA_DIR"),
            refinement_passes: read_env::<u32>("GEAR_REFINEMENT_PASSES"),
        }
    }

    /// `explicit` if given, else the environment, else [`DEFAULT_DATA_DIR`].
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Apply environment overrides on top of a loaded optimizer config.
    pub fn apply(&self, mut optimizer: OptimizerConfig) -> OptimizerConfig {
        if let Some(passes) = self.refinement_passes {
            optimizer.refinement_passes = passes;
        }
        optimizer
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = PlannerConfig {
            data_dir: Some(PathBuf::from("/srv/gear")),
            refinement_passes: None,
        };
        assert_eq!(
            config.resolve_data_dir(Some(PathBuf::from("local"))),
            PathBuf::from("local")
        );
        assert_eq!(config.resolve_data_dir(None), PathBuf::from("/srv/gear"));
        assert_eq!(
            PlannerConfig::default().resolve_data_dir(None),
            PathBuf::from(DEFAULT_DATA_DIR)
        );
    }

    #[test]
    fn pass_override_applies() {
        let config = PlannerConfig {
            data_dir: None,
            refinement_passes: Some(2),
        };
        assert_eq!(config.apply(OptimizerConfig::default()).refinement_passes, 2);
        assert_eq!(
            PlannerConfig::default()
                .apply(OptimizerConfig::default())
                .refinement_passes,
            OptimizerConfig::DEFAULT_REFINEMENT_PASSES
        );
    }
}
