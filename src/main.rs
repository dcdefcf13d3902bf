//! Pdfmill CLI: render a tree of html files to pdf; use --dry-run to walk and count without rendering.

use anyhow::Result;
use clap::Parser;
use pdfmill::engine::arg_parser::Cli;
use pdfmill::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
