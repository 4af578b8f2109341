//! Non-fatal conditions recorded while analyzing a graph
//!
//! None of these stop an analysis. They tell the caller which relationships
//! were not counted so that partial results can be read correctly.

use crate::core::ModuleId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeIssue {
    pub module: ModuleId,
    #[serde(flatten)]
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IssueKind {
    /// No type information; the module was left out of structural coupling
    TypeInfoUnavailable,
    /// Declarations the front end could not classify, counted as `other`
    MalformedDeclaration { count: usize },
}

impl NodeIssue {
    pub fn new(module: ModuleId, kind: IssueKind) -> Self {
        Self { module, kind }
    }
}

impl fmt::Display for NodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::TypeInfoUnavailable => write!(
                f,
                "{}: type information unavailable, skipped structural coupling",
                self.module
            ),
            IssueKind::MalformedDeclaration { count } => write!(
                f,
                "{}: {} unrecognized declaration(s) counted as other",
                self.module, count
            ),
        }
    }
}

/// Which analysis phases have run on a graph
///
/// Zero-valued metrics are ambiguous on their own; this is how callers tell
/// "no structural coupling" from "structural coupling not computed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhasesRun {
    pub metrics: bool,
    pub structural: bool,
}
