//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::infra::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global fmt subscriber writing to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install tracing subscriber")
}

/// Build the filter from config, falling back to the default on bad syntax.
pub fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
