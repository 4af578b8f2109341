use crate::io::{OutputFormat, SortKey};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const METRICS_HELP: &str = "\
Metrics:
  Ca   Afferent coupling: modules that import this module
  Ce   Efferent coupling: modules this module imports
  A    Abstractness: exported contract types / all types (0..1)
  I    Instability: Ce / (Ce + Ca) (0..1)
  D    Distance from the main sequence: |A + I - 1| (0..1)

With --types:
  SCa  Modules whose types satisfy this module's contracts without it importing them
  SCe  Modules whose contracts this module's types satisfy without importing them";

#[derive(Parser, Debug)]
#[command(name = "couplingmap")]
#[command(about = "Module coupling and abstractness metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print Martin package metrics for every module
    #[command(after_help = METRICS_HELP)]
    Metrics {
        #[command(flatten)]
        args: AnalysisArgs,

        /// Sort by metric, largest first (default: d)
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },

    /// List modules with declaration totals and direct imports
    List {
        #[command(flatten)]
        args: AnalysisArgs,
    },
}

impl Commands {
    pub fn args(&self) -> &AnalysisArgs {
        match self {
            Commands::Metrics { args, .. } | Commands::List { args } => args,
        }
    }
}

/// Flags shared by every analysis command
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// Module set document (JSON)
    pub path: PathBuf,

    /// Keep standard modules in the output
    #[arg(long = "std")]
    pub include_standard: bool,

    /// Module set document holding the standard baseline
    /// (default: modules flagged `standard` in the input)
    #[arg(long = "std-baseline", value_name = "FILE")]
    pub std_baseline: Option<PathBuf>,

    /// Compute structural coupling (SCa/SCe)
    #[arg(long = "types")]
    pub types: bool,

    /// Output format (default: terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit the table header
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: nearest .couplingmap.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v: warnings for skipped data, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Worker threads (0 = all cores)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Disable parallel analysis
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_metrics_flags() {
        let cli = Cli::try_parse_from([
            "couplingmap",
            "metrics",
            "modules.json",
            "--types",
            "--sort",
            "sce",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Metrics { args, sort } => {
                assert!(args.types);
                assert_eq!(sort, Some(SortKey::Sce));
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.verbosity, 2);
                assert_eq!(args.path, PathBuf::from("modules.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_rejects_sort() {
        assert!(Cli::try_parse_from(["couplingmap", "list", "m.json", "--sort", "d"]).is_err());
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        assert!(Cli::try_parse_from(["couplingmap", "metrics", "m.json", "--sort", "loc"]).is_err());
    }
}
