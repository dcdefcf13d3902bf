//! Pdfmill: concurrent batch renderer that turns a tree of html documents into pdfs.
//!
//! One producer thread walks the source tree and streams eligible paths into a
//! channel; a bounded pool of workers drains it, invoking the external renderer
//! once per document. A worker stops at its own first failure; its siblings run
//! their in-flight jobs to completion.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use std::path::Path;
use std::sync::Arc;

use engine::renderer::{DockerBackend, RenderBackend};
use pipeline::run_render_pipeline;

/// Result alias used by public pdfmill API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: render every eligible `.html` file under `src` into a
/// `.pdf` under `dest` with `opts`, using the docker backend.
///
/// Returns the run summary on a clean run. The `Err` arm carries the run's
/// terminal failure: an unresolvable source or destination, a walk I/O error,
/// or the first worker's render failure (wrapped with worker id and path).
pub fn render_dir(src: &Path, dest: &Path, opts: &RenderOpts) -> Result<RunSummary> {
    render_dir_with(src, dest, opts, Arc::new(DockerBackend::new()))
}

/// [`render_dir`] with an explicit render backend. Library callers use this to
/// substitute their own renderer for the docker invocation.
pub fn render_dir_with(
    src: &Path,
    dest: &Path,
    opts: &RenderOpts,
    backend: Arc<dyn RenderBackend>,
) -> Result<RunSummary> {
    run_render_pipeline(src, dest, opts, backend, None)
}
