//! Import closure resolution
//!
//! The graph builder uses import closures only for the upstream/downstream
//! declaration aggregates; none of the coupling metrics depend on them.
//! Depth and self-inclusion are configurable because different front ends
//! define "everything downstream of me" differently.

use crate::core::{ModuleId, ModuleSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Resolves the set of modules reachable through imports from a module
pub trait ImportClosureResolver: Sync {
    /// Ids reachable from `id`; may include ids that are not graph members
    fn import_closure(&self, id: &ModuleId) -> Vec<ModuleId>;
}

/// A precomputed closure table supplied by an external resolver
impl ImportClosureResolver for HashMap<ModuleId, Vec<ModuleId>> {
    fn import_closure(&self, id: &ModuleId) -> Vec<ModuleId> {
        self.get(id).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureOptions {
    /// Count a module as part of its own closure
    #[serde(default)]
    pub include_self: bool,
    /// Maximum import distance; `None` follows imports to the end
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Breadth-first transitive closure over a module set's import edges
///
/// Traversal continues through every module of the set it was built from,
/// which is usually the whole universe so that closures pass through
/// modules hidden from the displayed graph. Import cycles terminate.
#[derive(Debug, Clone)]
pub struct TransitiveImports {
    adjacency: HashMap<ModuleId, Vec<ModuleId>>,
    options: ClosureOptions,
}

impl TransitiveImports {
    pub fn new(modules: &ModuleSet, options: ClosureOptions) -> Self {
        let adjacency = modules
            .iter()
            .map(|m| (m.id.clone(), m.imports.iter().cloned().collect()))
            .collect();
        Self { adjacency, options }
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.options.max_depth.is_none_or(|max| depth <= max)
    }
}

impl ImportClosureResolver for TransitiveImports {
    fn import_closure(&self, id: &ModuleId) -> Vec<ModuleId> {
        let mut visited: HashSet<&ModuleId> = HashSet::from([id]);
        let mut queue: VecDeque<(&ModuleId, usize)> = VecDeque::from([(id, 0)]);
        let mut closure = Vec::new();

        while let Some((current, depth)) = queue.pop_front() {
            if !self.within_depth(depth + 1) {
                continue;
            }
            let Some(imports) = self.adjacency.get(current) else {
                continue;
            };
            for next in imports {
                if visited.insert(next) {
                    closure.push(next.clone());
                    queue.push_back((next, depth + 1));
                }
            }
        }

        if self.options.include_self {
            closure.push(id.clone());
        }
        closure.sort();
        closure
    }
}
