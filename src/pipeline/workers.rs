//! Consumer side: the bounded pool of render workers draining the path channel.

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::engine::renderer::render_job;

use super::context::RenderContext;

/// Single render worker: pull paths until the channel closes (clean exhaustion)
/// or a render fails. Fail-fast is per worker: the first failure ends this
/// worker's loop while the rest of the pool keeps draining.
fn render_worker_loop(id: usize, path_rx: Receiver<PathBuf>, ctx: Arc<RenderContext>) -> Result<()> {
    while let Ok(rel_path) = path_rx.recv() {
        render_job(id, &ctx, &rel_path)
            .with_context(|| format!("[{}] unable to render file, {}", id, rel_path.display()))?;
    }
    Ok(())
}

/// Spawn `concurrency` workers against the shared path channel. Each handle
/// resolves to that worker's terminal result: `Ok` on clean exhaustion, or the
/// first render error it hit.
pub fn spawn_render_workers(
    path_rx: &Receiver<PathBuf>,
    ctx: &Arc<RenderContext>,
    concurrency: usize,
) -> Vec<JoinHandle<Result<()>>> {
    (0..concurrency)
        .map(|id| {
            let path_rx = path_rx.clone();
            let ctx = Arc::clone(ctx);
            thread::spawn(move || render_worker_loop(id, path_rx, ctx))
        })
        .collect()
}
