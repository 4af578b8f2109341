//! Cycle-free view of a node for serialization
//!
//! Node links (to other nodes and to the owning graph) are replaced by module
//! ids, so the view can be serialized without walking back into the graph.

use super::NodeRef;
use crate::core::ModuleId;
use crate::metrics::{DeclStat, Zone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatNode {
    #[serde(rename = "ID")]
    pub id: ModuleId,
    /// Direct imports as written in the input, graph members or not
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ModuleId>,
    /// Direct imports that are members of the graph
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub import_nodes: Vec<ModuleId>,
    pub stat: DeclStat,
    pub up: DeclStat,
    pub down: DeclStat,
    #[serde(rename = "Ca")]
    pub ca: f64,
    #[serde(rename = "Ce")]
    pub ce: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "I")]
    pub i: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "SCa", skip_serializing_if = "Option::is_none")]
    pub sca: Option<f64>,
    #[serde(rename = "SCe", skip_serializing_if = "Option::is_none")]
    pub sce: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
}

impl FlatNode {
    /// Flatten a node; structural values and the zone are present only when
    /// their phases ran
    pub fn from_node(node: NodeRef<'_>) -> Self {
        let phases = node.graph().phases();
        let data = node.node();
        let metrics = data.metrics;

        Self {
            id: data.id.clone(),
            imports: data.module.imports.iter().cloned().collect(),
            import_nodes: node.imports().map(|n| n.node().id.clone()).collect(),
            stat: data.stat,
            up: data.up,
            down: data.down,
            ca: metrics.ca,
            ce: metrics.ce,
            a: metrics.a,
            i: metrics.i,
            d: metrics.d,
            sca: phases.structural.then_some(data.structural.sca),
            sce: phases.structural.then_some(data.structural.sce),
            zone: phases.metrics.then(|| Zone::classify(metrics.a, metrics.i)),
        }
    }
}
