//! Robert C. Martin package metrics
//!
//! - Ca (afferent): modules of the universe that import this one
//! - Ce (efferent): direct imports of this module
//! - A (abstractness): exported contract types / all types
//! - I (instability): Ce / (Ce + Ca)
//! - D (distance from the main sequence): |A + I - 1|
//!
//! Ca and Ce are both counted against the full universe of loaded modules,
//! not just the displayed graph, so dependents and dependencies hidden from
//! display (standard library, vendored code) still register.

use crate::core::{ModuleId, ModuleSet};
use crate::graph::Graph;
use crate::metrics::DeclStat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info_span;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CouplingMetrics {
    pub ca: f64,
    pub ce: f64,
    pub a: f64,
    pub i: f64,
    pub d: f64,
}

impl CouplingMetrics {
    /// Derive A, I and D from raw couplings and declaration counts
    pub fn from_counts(ca: usize, ce: usize, stat: &DeclStat) -> Self {
        let ca = ca as f64;
        let ce = ce as f64;
        let a = abstractness(stat);
        let i = instability(ca, ce);
        Self {
            ca,
            ce,
            a,
            i,
            d: distance(a, i),
        }
    }
}

/// Ratio of exported contract types to all type declarations, 0 without types
pub fn abstractness(stat: &DeclStat) -> f64 {
    if stat.all_types > 0 {
        stat.contract_types as f64 / stat.all_types as f64
    } else {
        0.0
    }
}

/// Ce / (Ce + Ca), 0 for a module with no couplings at all
pub fn instability(ca: f64, ce: f64) -> f64 {
    let total = ca + ce;
    if total > 0.0 {
        ce / total
    } else {
        0.0
    }
}

/// |A + I - 1|
pub fn distance(abstractness: f64, instability: f64) -> f64 {
    (abstractness + instability - 1.0).abs()
}

/// Number of modules in `universe`, other than the key itself, importing each key
fn afferent_counts(universe: &ModuleSet) -> HashMap<&ModuleId, usize> {
    let mut counts: HashMap<&ModuleId, usize> = HashMap::new();
    for module in universe.iter() {
        for imported in module.imports.iter().filter(|id| **id != module.id) {
            *counts.entry(imported).or_default() += 1;
        }
    }
    counts
}

impl Graph {
    /// Compute Ca, Ce, A, I and D for every node
    ///
    /// `universe` is every module considered by the run and may be a
    /// superset of the graph. Values are recomputed from scratch, so calling
    /// this twice yields the same result.
    pub fn compute_metrics(&mut self, universe: &ModuleSet) {
        let _span = info_span!("coupling_metrics", nodes = self.len()).entered();

        let afferent = afferent_counts(universe);
        for node in self.nodes_mut() {
            let ca = afferent.get(&node.id).copied().unwrap_or(0);
            let ce = node.module.imports.len();
            node.metrics = CouplingMetrics::from_counts(ca, ce, &node.stat);
        }

        self.phases_mut().metrics = true;
    }
}
