//! Runtime setup for the CLI

use tracing::debug;

/// Configure the rayon global pool once at startup; `jobs == 0` uses every core
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        debug!(error = %e, "Thread pool already configured");
    }
}
