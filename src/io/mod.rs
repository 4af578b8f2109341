//! Input and output at the edges of the engine
//!
//! [`loader`] reads module sets; [`output`] and [`writers`] present graphs.

pub mod loader;
pub mod output;
pub mod writers;

pub use loader::{load_module_set, parse_module_set};
pub use output::{create_writer, sort_nodes, OutputFormat, OutputWriter, SortKey};
