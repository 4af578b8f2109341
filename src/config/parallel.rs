//! Parallelism configuration.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParallelConfig {
    /// Run closure resolution and the structural search on rayon workers
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Size of the global rayon pool; `None` or 0 uses every core
    #[serde(default)]
    pub jobs: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Worker count to configure, falling back to available cores
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            Some(jobs) if jobs > 0 => jobs,
            _ => available_cores(),
        }
    }
}

fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}
