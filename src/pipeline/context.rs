//! Pipeline context and channels: shared state handed to the walk thread and render workers.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::engine::progress::{ProgressBar, ProgressCounter};
use crate::engine::renderer::RenderBackend;
use crate::utils::config::SCAN_CHANNEL_CAP;

/// Shared error slot: the walk thread records the first I/O error it hits and stops.
pub type ScanErrorSlot = Arc<Mutex<Option<anyhow::Error>>>;

/// Shared run state for one render pipeline. Built once by the coordinator and
/// handed to every worker behind an `Arc`.
pub struct RenderContext {
    /// Canonicalized source root; input paths are joined onto this.
    pub source_root: PathBuf,
    /// Absolute destination root; output paths are joined onto this.
    pub dest_root: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
    /// Advance the progress display every `tick` completed jobs.
    pub tick: u64,
    pub counter: Arc<ProgressCounter>,
    pub bar: Option<ProgressBar>,
    pub backend: Arc<dyn RenderBackend>,
}

/// Path handoff channel plus the walk's error slot. The channel is the single
/// shared sequence between the walk and the worker pool: each path is delivered
/// to exactly one worker, in no guaranteed order.
pub struct ScanChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub first_error: ScanErrorSlot,
}

pub fn create_scan_channels() -> ScanChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(SCAN_CHANNEL_CAP);
    ScanChannels {
        path_tx,
        path_rx,
        first_error: Arc::new(Mutex::new(None)),
    }
}
