//! Log subscriber setup.
//!
//! Terminal runs own the screen, so they only log when a log file is given.
//! Headless runs fall back to stderr.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::RainConfig;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

pub fn init(config: &RainConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Some(path) = &config.log_path {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_thread_names(true)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    } else if config.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    }

    Ok(())
}
