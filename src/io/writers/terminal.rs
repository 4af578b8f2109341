use crate::graph::{Graph, NodeRef};
use crate::io::output::{sort_nodes, OutputWriter, SortKey};
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

const METRICS_HEADER: [&str; 6] = ["ID", "Ca", "Ce", "A", "I", "D"];
const STRUCTURAL_HEADER: [&str; 2] = ["SCa", "SCe"];
const LIST_HEADER: [&str; 5] = ["ID", "Decls", "Up", "Down", "Imports"];

/// Aligned plain-text tables
pub struct TerminalWriter<W: Write> {
    writer: W,
    header: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING).force_no_tty();
        if self.header {
            table.set_header(header);
        }
        table
    }

    fn emit(&mut self, table: &Table, rows: usize) -> anyhow::Result<()> {
        if rows > 0 || self.header {
            writeln!(self.writer, "{table}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn metrics_row(node: &NodeRef<'_>, structural: bool) -> Vec<Cell> {
    let node = node.node();
    let m = node.metrics;
    let mut row = vec![
        Cell::new(node.id.as_str()),
        number(m.ca),
        number(m.ce),
        number(format!("{:.2}", m.a)),
        number(format!("{:.2}", m.i)),
        number(format!("{:.2}", m.d)),
    ];
    if structural {
        row.push(number(node.structural.sca));
        row.push(number(node.structural.sce));
    }
    row
}

fn list_row(node: &NodeRef<'_>) -> Vec<Cell> {
    let imports: Vec<&str> = node.module.imports.iter().map(|id| id.as_str()).collect();
    vec![
        Cell::new(node.node().id.as_str()),
        number(node.stat.total()),
        number(node.up.total()),
        number(node.down.total()),
        Cell::new(imports.join(" ")),
    ]
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_metrics(&mut self, graph: &Graph, sort: SortKey) -> anyhow::Result<()> {
        let structural = graph.phases().structural;
        let mut header = METRICS_HEADER.to_vec();
        if structural {
            header.extend(STRUCTURAL_HEADER);
        }

        let mut table = self.table(header);
        let nodes = sort_nodes(graph, sort);
        for node in &nodes {
            table.add_row(metrics_row(node, structural));
        }
        self.emit(&table, nodes.len())
    }

    fn write_list(&mut self, graph: &Graph) -> anyhow::Result<()> {
        let mut table = self.table(LIST_HEADER.to_vec());
        for node in graph.nodes() {
            table.add_row(list_row(&node));
        }
        self.emit(&table, graph.len())
    }
}
