//! Thread-local context tracking for crash reports.
//!
//! Records which analysis phase and which module the current thread is
//! working on. Context is per thread (rayon workers set their own) and is
//! restored by RAII guards, so nested phases and modules unwind correctly.

use crate::core::ModuleId;
use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// What the current thread was doing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_module: Option<ModuleId>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_module: None,
        }
    }
}

/// Major stages of an analysis run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Reading the module set document
    Loading,
    /// Waiting for the standard baseline snapshot
    BaselineResolution,
    /// Nodes, closures and direct edges
    GraphBuilding,
    /// Ca, Ce, A, I, D
    CouplingMetrics,
    /// SCa, SCe
    StructuralCoupling,
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::BaselineResolution => "baseline_resolution",
            Self::GraphBuilding => "graph_building",
            Self::CouplingMetrics => "coupling_metrics",
            Self::StructuralCoupling => "structural_coupling",
            Self::OutputGeneration => "output_generation",
        };
        f.write_str(name)
    }
}

/// Restores the previous context when dropped
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current analysis phase until the guard drops.
///
/// ```ignore
/// let _phase = set_phase(AnalysisPhase::GraphBuilding);
/// let graph = Graph::build(&modules, &resolver);
/// ```
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the module being analyzed until the guard drops
#[must_use]
pub fn set_current_module(id: impl Into<ModuleId>) -> ContextGuard {
    let id = id.into();
    update(move |ctx| ctx.current_module = Some(id))
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}
