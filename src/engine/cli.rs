//! CLI command handler: pull the renderer image, run the pipeline, print the summary.

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use crate::engine::arg_parser::Cli;
use crate::engine::progress::create_counter;
use crate::engine::renderer::DockerBackend;
use crate::pipeline::run_render_pipeline;
use crate::types::RenderOpts;
use crate::utils::setup_logging;

fn setup_opts(cli: &Cli) -> RenderOpts {
    setup_logging(cli.verbose);
    RenderOpts {
        concurrency: cli.concurrency as usize,
        tick: cli.tick,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    }
}

/// Run a render pass over the source tree. With `--dry-run` the walk and the
/// counters run as usual, but docker is never invoked and nothing is written.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    let backend = DockerBackend::new();

    if cli.dry_run {
        warn!("RUNNING IN DRY-RUN MODE. NO PDFS WILL BE GENERATED.");
    } else {
        debug!("Pulling renderer image...");
        backend.pull()?;
    }

    let bar = create_counter("rendering");
    let summary = run_render_pipeline(&cli.src, &cli.dest, &opts, Arc::new(backend), Some(bar))?;

    println!();
    println!();
    println!("{} PDF file(s) generated.", summary.rendered);
    println!();
    Ok(())
}
