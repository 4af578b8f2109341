use crate::baseline::{BaselineSource, StandardBaseline};
use crate::cli::args::{AnalysisArgs, Commands};
use crate::cli::setup::configure_thread_pool;
use crate::config::{load_config, load_config_from_path, CouplingmapConfig};
use crate::core::ModuleSet;
use crate::graph::{Graph, NodeIssue};
use crate::io::{create_writer, load_module_set, SortKey};
use crate::observability::{set_phase, AnalysisPhase};
use crate::pipeline::{analyze, AnalysisOptions};
use crate::structural::MethodSetOracle;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Metrics,
    List,
}

/// Config file settings with command-line flags applied on top
pub fn resolve_config(
    mut config: CouplingmapConfig,
    args: &AnalysisArgs,
    sort: Option<SortKey>,
) -> CouplingmapConfig {
    config.analysis.include_standard |= args.include_standard;
    config.analysis.structural |= args.types;
    if let Some(sort) = sort {
        config.analysis.sort = sort;
    }
    if let Some(format) = args.format {
        config.analysis.format = format;
    }
    if args.no_parallel {
        config.parallel.enabled = false;
    }
    if args.jobs.is_some() {
        config.parallel.jobs = args.jobs;
    }
    config
}

fn load_settings(args: &AnalysisArgs) -> Result<CouplingmapConfig> {
    match &args.config {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

fn load_inputs(
    args: &AnalysisArgs,
    include_standard: bool,
) -> Result<(ModuleSet, StandardBaseline)> {
    // A separate baseline document loads while the main set is read.
    let pending = match (&args.std_baseline, include_standard) {
        (Some(path), false) => Some(StandardBaseline::spawn_load(path.clone())),
        _ => None,
    };

    let universe = {
        let _phase = set_phase(AnalysisPhase::Loading);
        load_module_set(&args.path).context(format!("module set {}", args.path.display()))?
    };

    let baseline = match pending {
        Some(baseline) => baseline,
        None if include_standard => StandardBaseline::empty(),
        None => StandardBaseline::for_source(&BaselineSource::Flagged, &universe),
    };
    Ok((universe, baseline))
}

/// Print non-fatal issues as warnings when verbose, log them otherwise
pub fn report_issues(issues: &[NodeIssue], verbosity: u8) {
    for issue in issues {
        if verbosity > 0 {
            eprintln!("{} {issue}", "warning:".yellow().bold());
        } else {
            debug!(%issue, "Non-fatal issue");
        }
    }
}

fn open_output(args: &AnalysisArgs) -> Result<Box<dyn Write>> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn write_view(graph: &Graph, view: View, config: &CouplingmapConfig, args: &AnalysisArgs) -> Result<()> {
    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let mut writer = create_writer(config.analysis.format, open_output(args)?, args.no_header);
    match view {
        View::Metrics => writer.write_metrics(graph, config.analysis.sort),
        View::List => writer.write_list(graph),
    }
}

pub fn handle_command(command: &Commands) -> Result<()> {
    let (view, args, sort) = match command {
        Commands::Metrics { args, sort } => (View::Metrics, args, *sort),
        Commands::List { args } => (View::List, args, None),
    };

    let config = resolve_config(load_settings(args)?, args, sort);
    if config.parallel.enabled {
        configure_thread_pool(config.parallel.effective_jobs());
    }

    let (universe, baseline) = load_inputs(args, config.analysis.include_standard)?;
    let options = AnalysisOptions::from(&config);
    let graph = analyze(&universe, &baseline, &MethodSetOracle, &options)?;

    report_issues(graph.issues(), args.verbosity);
    write_view(&graph, view, &config, args)
}
