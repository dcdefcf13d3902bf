//! Renderer adapter: derives the output location for one job and dispatches it
//! to the external render backend.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::engine::progress::report_render_progress;
use crate::engine::tools::output_path_for;
use crate::pipeline::context::RenderContext;
use crate::utils::config::{OUTPUT_EXT, RENDER_ENTRYPOINT, RENDER_IMAGE};

/// One external render invocation: turn `input` into `output`. Implementations
/// block for the duration of the invocation and never retry.
pub trait RenderBackend: Send + Sync {
    fn render(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Backend that runs the renderer image once per document via `docker run`,
/// mounting the input's directory at `/work` and the output's at `/dest`.
pub struct DockerBackend {
    image: String,
}

impl DockerBackend {
    pub fn new() -> Self {
        Self::with_image(RENDER_IMAGE)
    }

    /// Use a renderer image other than the default.
    pub fn with_image(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }

    /// Pull the renderer image. Stdio is inherited so pull progress reaches the user.
    pub fn pull(&self) -> Result<()> {
        let status = Command::new("docker")
            .args(["pull", &self.image])
            .status()
            .context("unable to run docker pull")?;
        if !status.success() {
            bail!("docker pull {} exited with {}", self.image, status);
        }
        Ok(())
    }
}

impl Default for DockerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for DockerBackend {
    fn render(&self, input: &Path, output: &Path) -> Result<()> {
        let in_dir = input.parent().context("input path has no parent")?;
        let out_dir = output.parent().context("output path has no parent")?;
        let in_name = input.file_name().context("input path has no file name")?;
        let out_name = output.file_name().context("output path has no file name")?;

        let status = Command::new("docker")
            .args(["run", "--rm"])
            .arg("-v")
            .arg(format!("{}:/work", in_dir.display()))
            .arg("-v")
            .arg(format!("{}:/dest", out_dir.display()))
            .arg(&self.image)
            .arg(RENDER_ENTRYPOINT)
            .arg(in_name)
            .arg(format!("/dest/{}", out_name.to_string_lossy()))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("unable to run docker")?;
        if !status.success() {
            bail!("renderer exited with {}", status);
        }
        Ok(())
    }
}

/// Process one job end to end: derive the output path, honor dry-run, make sure
/// the output directory exists, count the job, and dispatch it to the backend.
///
/// Dry-run returns before any filesystem or process mutation but still counts
/// the job, so a dry run exercises the same counting and progress path as a
/// real one.
pub fn render_job(id: usize, ctx: &RenderContext, rel_path: &Path) -> Result<()> {
    let input = ctx.source_root.join(rel_path);
    let output = output_path_for(&ctx.dest_root, rel_path, OUTPUT_EXT);

    if ctx.verbose {
        debug!("[{:2}] rendering {}", id, rel_path.display());
    }
    if ctx.dry_run {
        report_render_progress(&ctx.counter, ctx.bar.as_ref(), ctx.tick);
        return Ok(());
    }

    // Workers create sibling output directories concurrently; create_dir_all is
    // idempotent so races between them are harmless.
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("unable to create output directory {}", parent.display()))?;
    }
    report_render_progress(&ctx.counter, ctx.bar.as_ref(), ctx.tick);

    ctx.backend.render(&input, &output)
}
