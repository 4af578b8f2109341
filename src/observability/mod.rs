//! Observability: tracing setup, per-thread analysis context and a crash
//! report panic hook.
//!
//! ```ignore
//! use couplingmap::observability::{init_tracing, install_panic_hook, set_phase, AnalysisPhase};
//!
//! install_panic_hook();
//! init_tracing(verbosity);
//! let _phase = set_phase(AnalysisPhase::GraphBuilding);
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_current_module, set_phase, AnalysisContext,
    AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, LOG_ENV};
