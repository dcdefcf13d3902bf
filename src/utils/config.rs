//! Application configuration constants.
//! Defaults and renderer contract in one place.

/// Default source directory for html inputs.
pub const DEFAULT_SOURCE: &str = "in";

/// Default destination directory for pdf outputs.
pub const DEFAULT_DEST: &str = "target";

/// Default number of concurrent render workers.
pub const DEFAULT_CONCURRENCY: usize = 25;

/// Default progress tick: advance the display every N completed jobs.
pub const DEFAULT_TICK: u64 = 250;

/// Renderer image, run once per document.
pub const RENDER_IMAGE: &str = "savaki/genpdf:latest";

/// Script entry point inside the renderer image.
pub const RENDER_ENTRYPOINT: &str = "html-pdf.js";

/// Input file suffix accepted by the walk filter.
pub const INPUT_EXT: &str = "html";

/// Output file suffix for derived paths.
pub const OUTPUT_EXT: &str = "pdf";

/// Path channel capacity. The walk streams paths to workers; capacity 1 keeps
/// at most one undelivered path pending, so discovery never runs far ahead of
/// consumption.
pub const SCAN_CHANNEL_CAP: usize = 1;
