// Export modules for library usage
pub mod baseline;
pub mod cli;
pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod observability;
pub mod pipeline;
pub mod structural;

// Re-export commonly used types
pub use crate::core::{
    ConcreteType, ContractType, Declaration, Error, MethodSig, Module, ModuleId, ModuleSet,
    Result, TypeInfo, TypeKind,
};

pub use crate::baseline::{BaselineSource, StandardBaseline};

pub use crate::config::CouplingmapConfig;

pub use crate::graph::{
    ClosureOptions, FlatNode, Graph, ImportClosureResolver, IssueKind, Node, NodeIndex,
    NodeIssue, NodeRef, PhasesRun, TransitiveImports,
};

pub use crate::metrics::{CouplingMetrics, DeclStat, Zone};

pub use crate::structural::{CompatibilityOracle, MethodSetOracle, Receiver, StructuralCoupling};

pub use crate::io::{create_writer, load_module_set, sort_nodes, OutputFormat, OutputWriter, SortKey};

pub use crate::pipeline::{analyze, AnalysisOptions};
