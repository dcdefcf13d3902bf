//! Producer side: walk the source tree and stream eligible paths to the render workers.

use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::engine::tools::{is_eligible, path_relative_to};
use crate::utils::config::INPUT_EXT;

use super::context::ScanErrorSlot;

/// One result from the directory walk: a candidate entry or a fatal walk error.
pub enum WalkOutcome {
    Ok { path: PathBuf, is_dir: bool },
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome(r: Result<walkdir::DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Ok {
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        },
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Spawn the walk thread over the canonicalized `root`. Eligible paths are sent
/// relative to `root`; the handle resolves to the number of paths sent.
pub fn spawn_walk_thread(
    path_tx: Sender<PathBuf>,
    root: PathBuf,
    first_error: ScanErrorSlot,
) -> JoinHandle<usize> {
    thread::spawn(move || {
        let iter = WalkDir::new(&root).into_iter().map(to_outcome);
        run_walk_loop(path_tx, &root, &first_error, iter)
    })
}

/// Consume `iter`, filter with `is_eligible`, and send accepted paths relative
/// to `root`. Any walk error is fatal to the scan: it is recorded in
/// `first_error` and the loop stops, which drops `path_tx` so the workers drain
/// what was already sent and exit. Returns the count of paths sent.
pub fn run_walk_loop<I>(
    path_tx: Sender<PathBuf>,
    root: &Path,
    first_error: &ScanErrorSlot,
    iter: I,
) -> usize
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut count = 0_usize;
    for outcome in iter {
        match outcome {
            WalkOutcome::Ok { path, is_dir } => {
                if !is_eligible(&path, is_dir, INPUT_EXT) {
                    continue;
                }
                let Some(rel) = path_relative_to(&path, root) else {
                    continue;
                };
                if path_tx.send(rel).is_err() {
                    break;
                }
                count += 1;
            }
            WalkOutcome::Err { msg, path } => {
                let err = match path {
                    Some(p) => anyhow::anyhow!("walk failed at {}: {}", p.display(), msg),
                    None => anyhow::anyhow!("walk failed: {}", msg),
                };
                let _ = first_error.lock().unwrap().get_or_insert(err);
                break;
            }
        }
    }
    drop(path_tx);
    count
}
