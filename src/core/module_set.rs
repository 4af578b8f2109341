//! Immutable, id-keyed collections of modules

use super::types::{Module, ModuleId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of resolved modules keyed by id, iterated in ascending id order
///
/// Modules are shared behind `Arc` so that the displayed subset, the
/// universe and the graph nodes can all point at the same records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSet {
    modules: BTreeMap<ModuleId, Arc<Module>>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from modules; a later module replaces an earlier one with
    /// the same id. Use `io::loader` when duplicates must be rejected.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>) -> Self {
        modules.into_iter().map(Arc::new).collect()
    }

    pub fn insert(&mut self, module: Arc<Module>) -> Option<Arc<Module>> {
        self.modules.insert(module.id.clone(), module)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Module>> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Module>> {
        self.modules.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ModuleId> {
        self.modules.keys()
    }

    /// Modules of `self` whose id is not in `other`
    pub fn subtract(&self, other: &ModuleSet) -> ModuleSet {
        self.iter()
            .filter(|m| !other.contains(m.id.as_str()))
            .cloned()
            .collect()
    }

    /// Modules flagged as members of the standard baseline
    pub fn standard_subset(&self) -> ModuleSet {
        self.iter().filter(|m| m.standard).cloned().collect()
    }
}

impl FromIterator<Arc<Module>> for ModuleSet {
    fn from_iter<T: IntoIterator<Item = Arc<Module>>>(iter: T) -> Self {
        Self {
            modules: iter.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_sorted_by_id() {
        let set = ModuleSet::from_modules([Module::new("c"), Module::new("a"), Module::new("b")]);
        let ids: Vec<&str> = set.ids().map(ModuleId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_subtract_removes_shared_ids() {
        let all = ModuleSet::from_modules([Module::new("app"), Module::new("fmt").standard()]);
        let std = all.standard_subset();
        let shown = all.subtract(&std);

        assert_eq!(shown.len(), 1);
        assert!(shown.contains("app"));
        assert!(!shown.contains("fmt"));
        // The original set is untouched.
        assert_eq!(all.len(), 2);
    }
}
