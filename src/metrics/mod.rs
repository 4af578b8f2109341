//! Metrics calculation module
//!
//! Declaration statistics, Martin coupling metrics and zone classification.

pub mod coupling;
pub mod decl_stat;
pub mod zones;

pub use coupling::{abstractness, distance, instability, CouplingMetrics};
pub use decl_stat::DeclStat;
pub use zones::Zone;
