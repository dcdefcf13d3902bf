//! Path and filter utilities

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Returns true if the entry should be handed to a render worker: a file whose
/// name carries the `input_ext` suffix and does not start with a dot.
pub fn is_eligible(path: &Path, is_dir: bool, input_ext: &str) -> bool {
    if is_dir {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.') && Path::new(name).extension().is_some_and(|ext| ext == input_ext)
}

/// Derive the output path for `input`: same location relative to `dest_root`,
/// with the suffix swapped for `output_ext`.
pub fn output_path_for(dest_root: &Path, input: &Path, output_ext: &str) -> PathBuf {
    dest_root.join(input.with_extension(output_ext))
}

/// Canonicalize the source root. Failure here aborts the run before any worker starts.
pub fn resolve_source_root(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("unable to resolve source directory, {}", path.display()))
}

/// Resolve the destination root to an absolute path. The directory itself may
/// not exist yet; output parents are created per job.
pub fn resolve_dest_root(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .with_context(|| format!("unable to determine path for destination, {}", path.display()))?;
    Ok(cwd.join(path))
}
