use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{DEFAULT_CONCURRENCY, DEFAULT_DEST, DEFAULT_SOURCE, DEFAULT_TICK};

/// Concurrent batch renderer: html in, pdf out.
#[derive(Clone, Parser)]
#[command(name = "pdfmill")]
#[command(about = "Generate pdf files from html files in a directory.")]
pub struct Cli {
    /// Directory with html files.
    #[arg(long, short = 's', value_name = "DIR", default_value = DEFAULT_SOURCE)]
    pub src: PathBuf,

    /// Directory where pdf files will be placed.
    #[arg(long, short = 'd', value_name = "DIR", default_value = DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Number of concurrent render workers.
    #[arg(long, short = 'j', default_value_t = DEFAULT_CONCURRENCY as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: u32,

    /// Advance the progress display every N rendered files.
    #[arg(long, short = 't', default_value_t = DEFAULT_TICK, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick: u64,

    /// Display additional logging.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Do everything but generate the pdfs.
    #[arg(long)]
    pub dry_run: bool,
}
