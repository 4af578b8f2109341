//! Standard baseline module set
//!
//! The baseline (standard library, vendored code...) is hidden from the
//! displayed graph but its modules still count as dependents for Ca. It is
//! passed explicitly to the pipeline as a read-only snapshot. Loading may
//! run on a background thread while the main module set is read;
//! [`StandardBaseline::snapshot`] is the synchronization point and resolves
//! the load exactly once.

use crate::core::{Error, ModuleSet, Result, ResultExt};
use crate::io::loader::load_module_set;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::debug;

/// Where the baseline comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineSource {
    /// Modules flagged `standard` in the analyzed input
    Flagged,
    /// A separate module-set document
    File(PathBuf),
}

#[derive(Debug, Default)]
pub struct StandardBaseline {
    snapshot: OnceCell<Arc<ModuleSet>>,
    pending: Mutex<Option<JoinHandle<Result<ModuleSet>>>>,
}

impl StandardBaseline {
    /// An already-resolved baseline
    pub fn from_set(modules: ModuleSet) -> Self {
        Self {
            snapshot: OnceCell::with_value(Arc::new(modules)),
            pending: Mutex::new(None),
        }
    }

    pub fn empty() -> Self {
        Self::from_set(ModuleSet::new())
    }

    /// Start loading a baseline document on a background thread
    pub fn spawn_load(path: PathBuf) -> Self {
        debug!(path = %path.display(), "Loading standard baseline in background");
        let handle = std::thread::spawn(move || {
            load_module_set(&path).context(format!("standard baseline {}", path.display()))
        });
        Self {
            snapshot: OnceCell::new(),
            pending: Mutex::new(Some(handle)),
        }
    }

    /// Resolve the baseline for a source; `Flagged` reads from `input`
    pub fn for_source(source: &BaselineSource, input: &ModuleSet) -> Self {
        match source {
            BaselineSource::Flagged => Self::from_set(input.standard_subset()),
            BaselineSource::File(path) => Self::spawn_load(path.clone()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// Wait for the baseline and return the shared snapshot
    pub fn snapshot(&self) -> Result<Arc<ModuleSet>> {
        self.snapshot
            .get_or_try_init(|| -> Result<Arc<ModuleSet>> {
                let handle = self.pending.lock().take().ok_or_else(|| {
                    Error::Baseline("baseline load already failed".to_string())
                })?;
                let modules = handle
                    .join()
                    .map_err(|_| Error::Baseline("baseline loader panicked".to_string()))??;
                debug!(modules = modules.len(), "Standard baseline resolved");
                Ok(Arc::new(modules))
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Module;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flagged_baseline_takes_standard_modules() {
        let input = ModuleSet::from_modules([Module::new("app"), Module::new("fmt").standard()]);
        let baseline = StandardBaseline::for_source(&BaselineSource::Flagged, &input);

        assert!(baseline.is_resolved());
        let snapshot = baseline.snapshot().unwrap();
        assert!(snapshot.contains("fmt"));
        assert!(!snapshot.contains("app"));
    }

    #[test]
    fn test_background_load_resolves_once() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"modules": [{{"id": "io"}}, {{"id": "fmt"}}]}}"#).unwrap();

        let baseline = StandardBaseline::spawn_load(file.path().to_path_buf());
        let first = baseline.snapshot().unwrap();
        let second = baseline.snapshot().unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_failed_load_is_an_error() {
        let baseline = StandardBaseline::spawn_load(PathBuf::from("/nonexistent/std.json"));
        let err = baseline.snapshot().unwrap_err();
        assert!(err.to_string().contains("standard baseline"));
        assert!(!baseline.is_resolved());
    }
}
