//! Public types for the pdfmill API and pipeline.

use crate::utils::config::{DEFAULT_CONCURRENCY, DEFAULT_TICK};

/// Options for one render run. `Default` matches the CLI defaults.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Number of concurrent render workers. Must be at least 1.
    pub concurrency: usize,
    /// Advance the progress display every `tick` completed jobs. 0 disables ticking.
    pub tick: u64,
    /// Log each job as a worker picks it up.
    pub verbose: bool,
    /// Walk, count, and derive outputs, but never touch the filesystem or invoke the renderer.
    pub dry_run: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            tick: DEFAULT_TICK,
            verbose: false,
            dry_run: false,
        }
    }
}

/// Aggregate outcome of a clean run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    /// Jobs that reached a render attempt (dry-run included).
    pub rendered: u64,
}
