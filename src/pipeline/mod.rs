//! Pipeline components: the walk producer, the render worker pool, and the coordinator.

pub mod context;
pub mod orchestrator;
pub mod walk;
pub mod workers;

pub use context::{RenderContext, ScanChannels, ScanErrorSlot, create_scan_channels};
pub use orchestrator::run_render_pipeline;
pub use walk::{WalkOutcome, run_walk_loop, spawn_walk_thread, to_outcome};
pub use workers::spawn_render_workers;
