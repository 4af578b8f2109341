//! Structural coupling (SCa / SCe)
//!
//! Finds concrete types in one module that satisfy contracts declared in
//! another module which it does not import. Such coupling is invisible to
//! Ca/Ce: nothing in the import graph connects the two modules, yet a change
//! to the contract silently changes whether the concrete type fits it.
//!
//! Counting rules, per ordered pair (C with concrete types, I with
//! contracts), C != I:
//! - the pair is "satisfied" when any concrete type of C, used by value or
//!   by reference, satisfies any contract of I; the search stops at the
//!   first hit, so a pair contributes at most once however many types match
//! - C.SCe += 1 unless C imports I (that coupling is already in Ce)
//! - I.SCa += 1 unless I imports C (that coupling is already in Ca)

use super::oracle::{CompatibilityOracle, Receiver};
use crate::core::{ConcreteType, ContractType, ModuleId};
use crate::graph::{Graph, IssueKind, NodeIndex, NodeIssue};
use crate::observability::set_current_module;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralCoupling {
    /// Modules whose types satisfy this module's contracts without it importing them
    pub sca: f64,
    /// Modules whose contracts this module's types satisfy without importing them
    pub sce: f64,
}

struct ContractHolder<'g> {
    idx: NodeIndex,
    contracts: Vec<&'g ContractType>,
}

struct ConcreteHolder<'g> {
    idx: NodeIndex,
    concretes: &'g [ConcreteType],
}

/// Contribution of one concrete-holding module, merged after the search
struct Tally {
    concrete: NodeIndex,
    sce: u32,
    contract_hits: Vec<NodeIndex>,
}

struct Partition<'g> {
    contract_holders: Vec<ContractHolder<'g>>,
    concrete_holders: Vec<ConcreteHolder<'g>>,
    without_types: Vec<ModuleId>,
}

fn partition(graph: &Graph) -> Partition<'_> {
    let mut partition = Partition {
        contract_holders: Vec::new(),
        concrete_holders: Vec::new(),
        without_types: Vec::new(),
    };

    for node in graph.nodes() {
        let node_data = node.node();
        let Some(types) = node_data.module.types.as_ref() else {
            partition.without_types.push(node_data.id.clone());
            continue;
        };

        let contracts: Vec<&ContractType> = types
            .contracts
            .iter()
            .filter(|c| c.is_meaningful())
            .collect();
        if !contracts.is_empty() {
            partition.contract_holders.push(ContractHolder {
                idx: node.index(),
                contracts,
            });
        }
        if !types.concretes.is_empty() {
            partition.concrete_holders.push(ConcreteHolder {
                idx: node.index(),
                concretes: &types.concretes,
            });
        }
    }

    partition
}

fn satisfies_any(
    oracle: &dyn CompatibilityOracle,
    concretes: &[ConcreteType],
    contracts: &[&ContractType],
) -> bool {
    concretes.iter().any(|concrete| {
        contracts.iter().any(|contract| {
            oracle.implements(concrete, Receiver::Value, contract)
                || oracle.implements(concrete, Receiver::Reference, contract)
        })
    })
}

fn tally(
    graph: &Graph,
    oracle: &dyn CompatibilityOracle,
    holder: &ConcreteHolder<'_>,
    contract_holders: &[ContractHolder<'_>],
) -> Tally {
    let concrete_node = graph.node(holder.idx);
    let _module = set_current_module(concrete_node.id.clone());
    let mut result = Tally {
        concrete: holder.idx,
        sce: 0,
        contract_hits: Vec::new(),
    };

    for contract_holder in contract_holders {
        if contract_holder.idx == holder.idx {
            continue;
        }
        if !satisfies_any(oracle, holder.concretes, &contract_holder.contracts) {
            continue;
        }

        let contract_node = graph.node(contract_holder.idx);
        debug!(
            concrete = %concrete_node.id,
            contract = %contract_node.id,
            "Structural match"
        );
        if !concrete_node.imports_module(contract_node.id.as_str()) {
            result.sce += 1;
        }
        if !contract_node.imports_module(concrete_node.id.as_str()) {
            result.contract_hits.push(contract_holder.idx);
        }
    }

    result
}

impl Graph {
    /// Compute SCa and SCe for every node
    ///
    /// Modules without type information are skipped and reported as issues;
    /// the remaining nodes still get results. With `parallel`, the outer
    /// loop runs on rayon workers and each worker's tally is merged
    /// afterwards, so no counter is shared between threads.
    pub fn compute_structural_coupling(
        &mut self,
        oracle: &dyn CompatibilityOracle,
        parallel: bool,
    ) {
        let _span = info_span!("structural_coupling", nodes = self.len(), parallel).entered();

        let Partition {
            contract_holders,
            concrete_holders,
            without_types,
        } = partition(self);
        debug!(
            contract_holders = contract_holders.len(),
            concrete_holders = concrete_holders.len(),
            "Searching structural matches"
        );

        let graph: &Graph = self;
        let tallies: Vec<Tally> = if parallel {
            concrete_holders
                .par_iter()
                .map(|holder| tally(graph, oracle, holder, &contract_holders))
                .collect()
        } else {
            concrete_holders
                .iter()
                .map(|holder| tally(graph, oracle, holder, &contract_holders))
                .collect()
        };

        for id in without_types {
            debug!(module = %id, "No type information, skipping structural coupling");
            self.record_issue(NodeIssue::new(id, IssueKind::TypeInfoUnavailable));
        }

        for node in self.nodes_mut() {
            node.structural = StructuralCoupling::default();
        }
        for tally in tallies {
            self.node_mut(tally.concrete).structural.sce += f64::from(tally.sce);
            for hit in tally.contract_hits {
                self.node_mut(hit).structural.sca += 1.0;
            }
        }

        self.phases_mut().structural = true;
    }
}
