//! Pipeline coordinator: wire the walk thread to the worker pool and aggregate the outcome.

use anyhow::{Result, ensure};
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::engine::progress::{ProgressBar, ProgressCounter};
use crate::engine::renderer::RenderBackend;
use crate::engine::tools::{resolve_dest_root, resolve_source_root};
use crate::types::{RenderOpts, RunSummary};

use super::context::{RenderContext, create_scan_channels};
use super::walk::spawn_walk_thread;
use super::workers::spawn_render_workers;

/// Run the full pipeline: walk `src` on a producer thread and drain it with
/// `opts.concurrency` render workers against `backend`.
///
/// The run's terminal error is the walk's I/O error if one was recorded,
/// otherwise the first failed worker's error; a clean run returns the summary.
/// `concurrency` of 0 is rejected here, before any thread is spawned.
pub fn run_render_pipeline(
    src: &Path,
    dest: &Path,
    opts: &RenderOpts,
    backend: Arc<dyn RenderBackend>,
    bar: Option<ProgressBar>,
) -> Result<RunSummary> {
    ensure!(
        opts.concurrency >= 1,
        "concurrency must be at least 1, got {}",
        opts.concurrency
    );

    let source_root = resolve_source_root(src)?;
    let dest_root = resolve_dest_root(dest)?;

    let channels = create_scan_channels();
    let counter = Arc::new(ProgressCounter::new());

    let ctx = Arc::new(RenderContext {
        source_root: source_root.clone(),
        dest_root,
        dry_run: opts.dry_run,
        verbose: opts.verbose,
        tick: opts.tick,
        counter: Arc::clone(&counter),
        bar,
        backend,
    });

    let walk_handle = spawn_walk_thread(
        channels.path_tx,
        source_root,
        Arc::clone(&channels.first_error),
    );
    let worker_handles = spawn_render_workers(&channels.path_rx, &ctx, opts.concurrency);
    // Workers hold their own receiver clones. Dropping ours means that once the
    // pool is gone every receiver is gone, so a walk blocked on send unblocks.
    drop(channels.path_rx);

    // Join every worker before deciding the outcome: a failure in one worker
    // never tears down a sibling's in-flight job.
    let mut first_failure: Option<anyhow::Error> = None;
    for handle in worker_handles {
        let result = handle
            .join()
            .unwrap_or_else(|_| Err(anyhow::anyhow!("render worker panicked")));
        if let Err(err) = result
            && first_failure.is_none()
        {
            first_failure = Some(err);
        }
    }

    let scanned = walk_handle
        .join()
        .map_err(|_| anyhow::anyhow!("walk thread panicked"))?;
    debug!("walk done, {} path(s) discovered", scanned);

    if let Some(err) = channels.first_error.lock().unwrap().take() {
        return Err(err);
    }
    if let Some(err) = first_failure {
        return Err(err);
    }

    Ok(RunSummary {
        rendered: counter.total(),
    })
}
