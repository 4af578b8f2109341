//! Command-line interface
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{parse_args, AnalysisArgs, Cli, Commands};
pub use commands::{handle_command, resolve_config, View};
pub use setup::configure_thread_pool;
