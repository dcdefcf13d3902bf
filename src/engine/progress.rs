//! Render progress: a shared atomic job counter plus a kdam counter display.

use kdam::{Animation, Bar, BarExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// Progress bar type alias
pub type ProgressBar = Arc<Mutex<Bar>>;

/// Count of jobs that reached a render attempt. Owned by the coordinator and
/// handed to every worker behind an `Arc`; increments are atomic so the total
/// is exact under full concurrency.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    completed: AtomicU64,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed job and return the new total.
    pub fn increment(&self) -> u64 {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Total recorded so far.
    pub fn total(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }
}

/// True when `value` lands on a tick boundary. `tick_every` of 0 disables
/// ticking. Display pacing only; never used for control flow.
pub fn should_tick(value: u64, tick_every: u64) -> bool {
    tick_every > 0 && value % tick_every == 0
}

/// Create a counter-style bar for an unknown total (shows count without percentage).
pub fn create_counter(desc: &'static str) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " files"
    )))
}

/// Update the bar if the lock is free. Contended updates are skipped; the
/// display catches up on a later tick.
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

/// Increment `counter` and advance the display by `tick_every` whenever the new
/// total lands on a tick boundary. Returns the new total.
pub fn report_render_progress(
    counter: &ProgressCounter,
    pb: Option<&ProgressBar>,
    tick_every: u64,
) -> u64 {
    let value = counter.increment();
    if let Some(pb) = pb
        && should_tick(value, tick_every)
    {
        update_progress_bar(pb, tick_every as usize);
    }
    value
}
