//! Structural coupling analysis
//!
//! Coupling inferred from type compatibility rather than import edges.

pub mod analyzer;
pub mod oracle;

pub use analyzer::StructuralCoupling;
pub use oracle::{CompatibilityOracle, MethodSetOracle, Receiver};
