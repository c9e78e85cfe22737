/// Tunable optimizer parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Upper bound on coordinate-descent passes after the greedy fill.
    pub refinement_passes: u32,

    /// Run [`crate::validate_stats`] on the request and warn when it fails.
    pub check_stat_budget: bool,
}

impl OptimizerConfig {
    pub const DEFAULT_REFINEMENT_PASSES: u32 = 10;

    #[must_use]
    pub fn with_refinement_passes(mut self, passes: u32) -> Self {
        self.refinement_passes = passes;
        self
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            refinement_passes: Self::DEFAULT_REFINEMENT_PASSES,
            check_stat_budget: true,
        }
    }
}
