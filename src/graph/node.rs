//! Graph nodes and the index type that links them
//!
//! Nodes never own each other or their graph. Every relation (node to
//! imported node, node to owning graph) is an index lookup through the
//! [`Graph`](super::Graph) arena, which keeps the cyclic structure free of
//! reference cycles.

use super::Graph;
use crate::core::{Module, ModuleId};
use crate::metrics::{CouplingMetrics, DeclStat};
use crate::structural::StructuralCoupling;
use std::ops::Deref;
use std::sync::Arc;

/// A stable identifier for a node within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeIndex(u32);

impl NodeIndex {
    pub fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// One module in the graph plus everything computed about it
#[derive(Debug, Clone)]
pub struct Node {
    pub id: ModuleId,
    pub module: Arc<Module>,
    /// Declarations of this module
    pub stat: DeclStat,
    /// Declarations of modules whose import closure contains this one
    pub up: DeclStat,
    /// Declarations of modules in this module's import closure
    pub down: DeclStat,
    /// Direct imports that are members of the same graph, sorted by id
    pub imports: Vec<NodeIndex>,
    pub metrics: CouplingMetrics,
    pub structural: StructuralCoupling,
}

impl Node {
    pub(crate) fn new(module: Arc<Module>, stat: DeclStat) -> Self {
        Self {
            id: module.id.clone(),
            module,
            stat,
            up: DeclStat::default(),
            down: DeclStat::default(),
            imports: Vec::new(),
            metrics: CouplingMetrics::default(),
            structural: StructuralCoupling::default(),
        }
    }

    /// Whether this node's module directly imports `id`, in or out of the graph
    pub fn imports_module(&self, id: &str) -> bool {
        self.module.imports(id)
    }
}

/// A node borrowed together with its owning graph
///
/// This is the lookup-only back-reference from a node to its graph: it lets
/// callers walk edges without nodes holding pointers to one another.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    index: NodeIndex,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn node(&self) -> &'g Node {
        self.graph.node(self.index)
    }

    /// Directly imported nodes, in id order
    pub fn imports(&self) -> impl Iterator<Item = NodeRef<'g>> + 'g {
        let graph = self.graph;
        self.node()
            .imports
            .iter()
            .map(move |&idx| NodeRef::new(graph, idx))
    }

    /// Graph members that import this node directly
    pub fn importers(&self) -> impl Iterator<Item = NodeRef<'g>> + 'g {
        let target = self.index;
        self.graph
            .nodes()
            .filter(move |n| n.node().imports.contains(&target))
    }
}

impl Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node()
    }
}
