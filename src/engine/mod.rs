//! Engine module for the render pipeline's building blocks

pub mod arg_parser;
pub mod cli;
pub mod progress;
pub mod renderer;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use progress::{ProgressCounter, should_tick};
pub use renderer::{DockerBackend, RenderBackend, render_job};
pub use tools::{is_eligible, output_path_for, path_relative_to};
