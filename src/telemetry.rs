//! Tracing setup.
//!
//! The terminal UI owns stdout, so log lines only go to a file, and only when
//! `QUIZ_LOG_PATH` is set.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init_tracing(config: &LogConfig) -> Result<bool> {
    let Some(path) = &config.path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))?;

    Ok(true)
}
