//! Analysis pipeline
//!
//! Runs the engine phases in order over an already-loaded universe:
//! subtract the standard baseline from the displayed set, build the graph,
//! compute coupling metrics against the whole universe, then (optionally)
//! structural coupling. The result is a best-effort [`Graph`] carrying any
//! non-fatal issues; the only error is a failed baseline load.

use crate::baseline::StandardBaseline;
use crate::config::CouplingmapConfig;
use crate::core::{ModuleSet, Result};
use crate::graph::{ClosureOptions, Graph, TransitiveImports};
use crate::observability::{set_phase, AnalysisPhase};
use crate::structural::CompatibilityOracle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Keep baseline modules in the displayed graph
    pub include_standard: bool,
    /// Run the structural coupling phase
    pub structural: bool,
    /// Parallel structural search
    pub parallel: bool,
    pub closure: ClosureOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_standard: false,
            structural: false,
            parallel: true,
            closure: ClosureOptions::default(),
        }
    }
}

impl From<&CouplingmapConfig> for AnalysisOptions {
    fn from(config: &CouplingmapConfig) -> Self {
        Self {
            include_standard: config.analysis.include_standard,
            structural: config.analysis.structural,
            parallel: config.parallel.enabled,
            closure: config.closure,
        }
    }
}

/// The modules to display: the universe minus the baseline, unless the
/// baseline is kept
pub fn displayed_modules(
    universe: &ModuleSet,
    baseline: &StandardBaseline,
    include_standard: bool,
) -> Result<ModuleSet> {
    if include_standard {
        return Ok(universe.clone());
    }

    let _phase = set_phase(AnalysisPhase::BaselineResolution);
    let standard = baseline.snapshot()?;
    let displayed = universe.subtract(&standard);
    debug!(
        universe = universe.len(),
        standard = standard.len(),
        displayed = displayed.len(),
        "Subtracted standard baseline"
    );
    Ok(displayed)
}

/// Build and analyze the graph for `universe`
///
/// Baseline modules that are not part of `universe` are not counted: Ca
/// is measured against the modules the caller actually loaded.
pub fn analyze(
    universe: &ModuleSet,
    baseline: &StandardBaseline,
    oracle: &dyn CompatibilityOracle,
    options: &AnalysisOptions,
) -> Result<Graph> {
    let displayed = displayed_modules(universe, baseline, options.include_standard)?;

    let mut graph = {
        let _phase = set_phase(AnalysisPhase::GraphBuilding);
        let resolver = TransitiveImports::new(universe, options.closure);
        Graph::build_with(&displayed, &resolver, options.parallel)
    };

    {
        let _phase = set_phase(AnalysisPhase::CouplingMetrics);
        graph.compute_metrics(universe);
    }

    if options.structural {
        let _phase = set_phase(AnalysisPhase::StructuralCoupling);
        graph.compute_structural_coupling(oracle, options.parallel);
    }

    info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        issues = graph.issues().len(),
        "Analysis complete"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Module;
    use crate::structural::MethodSetOracle;

    fn universe() -> ModuleSet {
        ModuleSet::from_modules([
            Module::new("app").with_imports(["fmt", "lib"]),
            Module::new("lib").with_imports(["fmt"]),
            Module::new("fmt").standard(),
        ])
    }

    #[test]
    fn test_baseline_hidden_but_counted() {
        let universe = universe();
        let baseline = StandardBaseline::for_source(&crate::baseline::BaselineSource::Flagged, &universe);
        let graph = analyze(
            &universe,
            &baseline,
            &MethodSetOracle,
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert!(!graph.contains("fmt"));
        assert_eq!(graph.len(), 2);
        // app still imports fmt: Ce counts it even though it is not a node.
        assert_eq!(graph.get("app").unwrap().metrics.ce, 2.0);
        assert_eq!(graph.get("lib").unwrap().metrics.ca, 1.0);
        assert!(!graph.phases().structural);
    }

    #[test]
    fn test_include_standard_keeps_baseline_nodes() {
        let universe = universe();
        let options = AnalysisOptions {
            include_standard: true,
            structural: true,
            ..Default::default()
        };
        let graph = analyze(&universe, &StandardBaseline::empty(), &MethodSetOracle, &options).unwrap();

        assert_eq!(graph.get("fmt").unwrap().metrics.ca, 2.0);
        assert!(graph.phases().structural);
    }

    #[test]
    fn test_options_from_config() {
        let mut config = CouplingmapConfig::default();
        config.analysis.structural = true;
        config.parallel.enabled = false;
        config.closure.max_depth = Some(1);

        let options = AnalysisOptions::from(&config);
        assert!(options.structural);
        assert!(!options.parallel);
        assert_eq!(options.closure.max_depth, Some(1));
    }
}
