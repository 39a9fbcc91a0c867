//! File logging for the terminal runner.
//!
//! The game owns the terminal, so log records never go to stderr. They are
//! appended to the file named in [`RunnerConfig::log_path`] instead.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::RunnerConfig;

/// Install the global logger when a log path is configured.
///
/// Returns `false` (and installs nothing) when logging is disabled.
pub fn init(config: &RunnerConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;

    Ok(true)
}
