//! Configuration from `.couplingmap.toml`
//!
//! ```toml
//! [analysis]
//! include_standard = false
//! structural = true
//! sort = "d"          # d, ca, ce, a, i, sca, sce, id
//! format = "terminal" # terminal, json
//!
//! [closure]
//! include_self = false
//! max_depth = 3       # omit for unbounded
//!
//! [parallel]
//! enabled = true
//! jobs = 0            # 0 = all cores
//! ```
//!
//! The file is looked up from the current directory upwards. Command-line
//! flags override it.

pub mod core;
pub mod loader;
pub mod parallel;

pub use self::core::{AnalysisConfig, CouplingmapConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
