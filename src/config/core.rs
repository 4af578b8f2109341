use super::parallel::ParallelConfig;
use crate::graph::ClosureOptions;
use crate::io::{OutputFormat, SortKey};
use serde::{Deserialize, Serialize};

/// Root of `.couplingmap.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CouplingmapConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// How far import closures reach when aggregating up/down statistics
    #[serde(default)]
    pub closure: ClosureOptions,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Keep standard modules in the displayed graph
    #[serde(default)]
    pub include_standard: bool,

    /// Run the structural coupling phase (SCa/SCe)
    #[serde(default)]
    pub structural: bool,

    #[serde(default)]
    pub sort: SortKey,

    #[serde(default)]
    pub format: OutputFormat,
}
