//! Tracing subscriber setup.

use std::io::IsTerminal;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full filter directive, e.g.
/// `COUPLINGMAP_LOG=couplingmap::structural=debug,couplingmap=info`
pub const LOG_ENV: &str = "COUPLINGMAP_LOG";

static INIT: Once = Once::new();

/// Filter used when `COUPLINGMAP_LOG` is unset or invalid
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "couplingmap=warn",
        1 => "couplingmap=info",
        2 => "couplingmap=debug",
        _ => "couplingmap=trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Idempotent; later calls (and calls after another subscriber was
/// installed, as in tests) are no-ops.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(verbosity >= 2)
                    .with_thread_ids(verbosity >= 3),
            )
            .with(filter)
            .try_init();
    });
}
