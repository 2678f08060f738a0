use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Filtering comes from `RUST_LOG` (default `info`). Events go to stderr so
/// stdout carries only command output: human-readable on a terminal, one
/// flattened JSON object per line otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match default_log_mode() {
        LogMode::Pretty => builder.init(),
        LogMode::Json => builder.json().flatten_event(true).init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
