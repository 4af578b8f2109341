//! Module dependency graph construction
//!
//! Builds one node per module, accumulates declaration statistics along
//! import closures, and materializes direct-import edges between nodes that
//! are members of the graph. References to modules outside the graph are
//! dropped without complaint: the analyzed set is routinely a deliberate
//! subset of a larger universe (for instance with the standard library
//! excluded).

use super::closure::{ClosureOptions, ImportClosureResolver, TransitiveImports};
use super::issues::{IssueKind, NodeIssue, PhasesRun};
use super::node::{Node, NodeIndex, NodeRef};
use crate::core::{Declaration, ModuleId, ModuleSet};
use crate::metrics::DeclStat;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info_span};

/// Module dependency graph
///
/// Nodes live in an arena ordered by ascending id; that order is the
/// graph's sorted node list and every consumer relies on it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<ModuleId, NodeIndex>,
    /// Sum of every node's own declarations
    pub stat: DeclStat,
    phases: PhasesRun,
    issues: Vec<NodeIssue>,
}

impl Graph {
    /// Build a graph whose closures are resolved within `modules` itself
    pub fn from_modules(modules: &ModuleSet) -> Self {
        let resolver = TransitiveImports::new(modules, ClosureOptions::default());
        Self::build(modules, &resolver)
    }

    /// Build a graph from a module set and an import closure resolver
    pub fn build(modules: &ModuleSet, resolver: &dyn ImportClosureResolver) -> Self {
        Self::build_with(modules, resolver, true)
    }

    /// Like [`Graph::build`]; `parallel` resolves closures on rayon workers
    pub fn build_with(
        modules: &ModuleSet,
        resolver: &dyn ImportClosureResolver,
        parallel: bool,
    ) -> Self {
        let _span = info_span!("graph_build", modules = modules.len(), parallel).entered();

        let mut graph = Self::with_nodes(modules);
        graph.accumulate_closures(resolver, parallel);
        graph.link_direct_imports();

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "Built module graph"
        );
        graph
    }

    fn with_nodes(modules: &ModuleSet) -> Self {
        let mut graph = Self::default();

        // ModuleSet iterates in id order, so the arena comes out sorted.
        for module in modules.iter() {
            let stat = DeclStat::classify(&module.declarations);
            let unrecognized = module
                .declarations
                .iter()
                .filter(|d| matches!(d, Declaration::Unrecognized))
                .count();
            if unrecognized > 0 {
                graph.issues.push(NodeIssue::new(
                    module.id.clone(),
                    IssueKind::MalformedDeclaration {
                        count: unrecognized,
                    },
                ));
            }

            let idx = NodeIndex::new(graph.nodes.len());
            graph.index.insert(module.id.clone(), idx);
            graph.nodes.push(Node::new(module.clone(), stat));
            graph.stat += stat;
        }

        graph
    }

    fn accumulate_closures(&mut self, resolver: &dyn ImportClosureResolver, parallel: bool) {
        let closure_of = |node: &Node| -> BTreeSet<NodeIndex> {
            resolver
                .import_closure(&node.id)
                .iter()
                .filter_map(|id| self.index.get(id).copied())
                .collect()
        };
        let members: Vec<BTreeSet<NodeIndex>> = if parallel {
            self.nodes.par_iter().map(closure_of).collect()
        } else {
            self.nodes.iter().map(closure_of).collect()
        };

        let stats: Vec<DeclStat> = self.nodes.iter().map(|n| n.stat).collect();
        for (idx, closure) in members.into_iter().enumerate() {
            for member in closure {
                self.nodes[idx].down += stats[member.index()];
                self.nodes[member.index()].up += stats[idx];
            }
        }
    }

    fn link_direct_imports(&mut self) {
        for idx in 0..self.nodes.len() {
            let node = &self.nodes[idx];
            let mut imports: Vec<NodeIndex> = Vec::with_capacity(node.module.imports.len());
            for id in &node.module.imports {
                match self.index.get(id) {
                    Some(&target) => imports.push(target),
                    None => debug!(module = %node.id, import = %id, "Import outside graph, edge dropped"),
                }
            }
            imports.sort_unstable();
            self.nodes[idx].imports = imports;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in ascending id order
    pub fn sorted_nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.index()]
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        &mut self.nodes[idx.index()]
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|idx| self.node(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_ref(&self, idx: NodeIndex) -> NodeRef<'_> {
        NodeRef::new(self, idx)
    }

    /// Nodes with access to their graph, in ascending id order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef::new(self, NodeIndex::new(i)))
    }

    /// Number of materialized direct-import edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.imports.len()).sum()
    }

    pub fn phases(&self) -> PhasesRun {
        self.phases
    }

    pub(crate) fn phases_mut(&mut self) -> &mut PhasesRun {
        &mut self.phases
    }

    /// Non-fatal issues accumulated by every phase that ran
    pub fn issues(&self) -> &[NodeIssue] {
        &self.issues
    }

    pub(crate) fn record_issue(&mut self, issue: NodeIssue) {
        if !self.issues.contains(&issue) {
            self.issues.push(issue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Module;
    use pretty_assertions::assert_eq;

    fn funcs(n: usize) -> Vec<Declaration> {
        (0..n).map(|i| Declaration::function(format!("f{i}"))).collect()
    }

    fn layered() -> ModuleSet {
        // app -> svc -> base, app -> base, svc -> fmt (not in the set)
        ModuleSet::from_modules([
            Module::new("svc")
                .with_imports(["base", "fmt"])
                .with_declarations(funcs(2)),
            Module::new("app")
                .with_imports(["svc", "base"])
                .with_declarations(funcs(1)),
            Module::new("base").with_declarations(funcs(4)),
        ])
    }

    #[test]
    fn test_nodes_sorted_by_id() {
        let graph = Graph::from_modules(&layered());
        let ids: Vec<&str> = graph.sorted_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["app", "base", "svc"]);
    }

    #[test]
    fn test_aggregate_stat_is_sum_of_nodes() {
        let graph = Graph::from_modules(&layered());
        assert_eq!(graph.stat.functions, 7);
    }

    #[test]
    fn test_direct_imports_drop_missing_targets() {
        let graph = Graph::from_modules(&layered());
        let svc = graph.node_ref(graph.index_of("svc").unwrap());
        let imported: Vec<&str> = svc.imports().map(|n| n.node().id.as_str()).collect();
        assert_eq!(imported, vec!["base"]);

        let app = graph.node_ref(graph.index_of("app").unwrap());
        let imported: Vec<&str> = app.imports().map(|n| n.node().id.as_str()).collect();
        assert_eq!(imported, vec!["base", "svc"]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.issues().is_empty());
    }

    #[test]
    fn test_up_and_down_follow_transitive_imports() {
        let graph = Graph::from_modules(&layered());

        let app = graph.get("app").unwrap();
        assert_eq!(app.down.functions, 6);
        assert_eq!(app.up.functions, 0);

        let base = graph.get("base").unwrap();
        assert_eq!(base.up.functions, 3);
        assert_eq!(base.down.functions, 0);

        let svc = graph.get("svc").unwrap();
        assert_eq!(svc.up.functions, 1);
        assert_eq!(svc.down.functions, 4);
    }

    #[test]
    fn test_include_self_counts_own_stat() {
        let modules = layered();
        let resolver = TransitiveImports::new(
            &modules,
            ClosureOptions {
                include_self: true,
                max_depth: None,
            },
        );
        let graph = Graph::build(&modules, &resolver);
        let base = graph.get("base").unwrap();
        assert_eq!(base.up.functions, 7);
        assert_eq!(base.down.functions, 4);
    }

    #[test]
    fn test_sequential_build_matches_parallel() {
        let modules = layered();
        let resolver = TransitiveImports::new(&modules, ClosureOptions::default());
        let parallel = Graph::build_with(&modules, &resolver, true);
        let sequential = Graph::build_with(&modules, &resolver, false);

        for (p, s) in parallel.sorted_nodes().iter().zip(sequential.sorted_nodes()) {
            assert_eq!(p.id, s.id);
            assert_eq!(p.up, s.up);
            assert_eq!(p.down, s.down);
        }
        assert_eq!(sequential.get("svc").unwrap().down.functions, 4);
    }

    #[test]
    fn test_importers_walk_back_edges() {
        let graph = Graph::from_modules(&layered());
        let base = graph.node_ref(graph.index_of("base").unwrap());
        let importers: Vec<&str> = base.importers().map(|n| n.node().id.as_str()).collect();
        assert_eq!(importers, vec!["app", "svc"]);
        assert!(std::ptr::eq(base.graph(), &graph));
    }

    #[test]
    fn test_unrecognized_declarations_are_reported() {
        let modules = ModuleSet::from_modules([Module::new("m")
            .with_declarations(vec![Declaration::Unrecognized, Declaration::Unrecognized])]);
        let graph = Graph::from_modules(&modules);

        assert_eq!(graph.get("m").unwrap().stat.other, 2);
        assert_eq!(
            graph.issues(),
            &[NodeIssue::new(
                "m".into(),
                IssueKind::MalformedDeclaration { count: 2 }
            )]
        );
    }

    #[test]
    fn test_duplicate_closure_entries_count_once() {
        let modules = layered();
        let mut table = HashMap::new();
        table.insert(
            ModuleId::from("app"),
            vec!["base".into(), "base".into(), "svc".into()],
        );
        let graph = Graph::build(&modules, &table);
        assert_eq!(graph.get("app").unwrap().down.functions, 6);
        assert_eq!(graph.get("base").unwrap().up.functions, 1);
    }

    #[test]
    fn test_metrics_start_at_zero() {
        let graph = Graph::from_modules(&layered());
        assert_eq!(graph.phases(), PhasesRun::default());
        for node in graph.sorted_nodes() {
            assert_eq!(node.metrics.ca, 0.0);
            assert_eq!(node.structural.sce, 0.0);
        }
    }
}
