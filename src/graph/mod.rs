//! Module dependency graph
//!
//! The graph is an arena of nodes in ascending id order. Edges and the
//! node-to-graph back-reference are index lookups; exported views replace
//! them with module ids (see [`flat`]).

pub mod builder;
pub mod closure;
pub mod flat;
pub mod issues;
pub mod node;

pub use builder::Graph;
pub use closure::{ClosureOptions, ImportClosureResolver, TransitiveImports};
pub use flat::FlatNode;
pub use issues::{IssueKind, NodeIssue, PhasesRun};
pub use node::{Node, NodeIndex, NodeRef};
