use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Install the global logger. Verbose enables debug output for this crate;
/// dependencies stay at warn either way.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            let line = match record.level() {
                Level::Warn => format!("[{} {}] {}", name, "WARN".yellow(), record.args()),
                Level::Error => format!("[{} {}] {}", name, "ERROR".red(), record.args()),
                _ => format!("[{}] {}", name, record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
