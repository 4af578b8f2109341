use crate::graph::{FlatNode, Graph, NodeRef};
use crate::io::output::{sort_nodes, OutputWriter, SortKey};
use std::io::Write;

/// Writes node views as a pretty-printed JSON array
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_nodes<'g>(&mut self, nodes: impl Iterator<Item = NodeRef<'g>>) -> anyhow::Result<()> {
        let flat: Vec<FlatNode> = nodes.map(FlatNode::from_node).collect();
        let json = serde_json::to_string_pretty(&flat)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_metrics(&mut self, graph: &Graph, sort: SortKey) -> anyhow::Result<()> {
        self.write_nodes(sort_nodes(graph, sort).into_iter())
    }

    fn write_list(&mut self, graph: &Graph) -> anyhow::Result<()> {
        self.write_nodes(graph.nodes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Module, ModuleSet};
    use serde_json::Value;

    #[test]
    fn test_metrics_json_follows_sort_order() {
        let set = ModuleSet::from_modules([Module::new("app").with_imports(["lib"]), Module::new("lib")]);
        let mut graph = Graph::from_modules(&set);
        graph.compute_metrics(&set);

        let mut writer = JsonWriter::new(Vec::new());
        writer.write_metrics(&graph, SortKey::Ca).unwrap();
        let value: Value = serde_json::from_slice(&writer.into_inner()).unwrap();

        let nodes = value.as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0]["ID"], "lib");
        assert_eq!(nodes[0]["Ca"], 1.0);
        assert_eq!(nodes[1]["Imports"][0], "lib");
    }
}
