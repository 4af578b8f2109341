use crate::graph::{Graph, Node, NodeRef};
use crate::io::writers::{JsonWriter, TerminalWriter};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Metric the `metrics` view is ordered by (largest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Distance from the main sequence
    #[default]
    D,
    Ca,
    Ce,
    A,
    I,
    Sca,
    Sce,
    /// Module id, ascending
    Id,
}

impl SortKey {
    fn value(self, node: &Node) -> Option<f64> {
        match self {
            SortKey::D => Some(node.metrics.d),
            SortKey::Ca => Some(node.metrics.ca),
            SortKey::Ce => Some(node.metrics.ce),
            SortKey::A => Some(node.metrics.a),
            SortKey::I => Some(node.metrics.i),
            SortKey::Sca => Some(node.structural.sca),
            SortKey::Sce => Some(node.structural.sce),
            SortKey::Id => None,
        }
    }
}

/// Graph nodes ordered for display
///
/// The sort is stable and starts from the graph's id order, so nodes with
/// equal values stay in ascending id order.
pub fn sort_nodes(graph: &Graph, key: SortKey) -> Vec<NodeRef<'_>> {
    let mut nodes: Vec<NodeRef<'_>> = graph.nodes().collect();
    if key != SortKey::Id {
        nodes.sort_by(|a, b| {
            let a = key.value(a.node()).unwrap_or_default();
            let b = key.value(b.node()).unwrap_or_default();
            b.total_cmp(&a)
        });
    }
    nodes
}

pub trait OutputWriter {
    /// Martin metrics per node, ordered by `sort`
    fn write_metrics(&mut self, graph: &Graph, sort: SortKey) -> anyhow::Result<()>;

    /// Nodes in id order with declaration totals and direct imports
    fn write_list(&mut self, graph: &Graph) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    out: Box<dyn Write>,
    no_header: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out).with_header(!no_header)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
    }
}
