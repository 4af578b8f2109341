//! Command handlers for CLI subcommands

mod analyze;

pub use analyze::{handle_command, report_issues, resolve_config, View};
