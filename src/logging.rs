//! Logging setup.
//!
//! Installs a compact `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level when it is set.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Install the global subscriber at `level`.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Install the global subscriber at the level named in `config`.
pub fn init_from_config(config: &Config) -> Result<()> {
    init_logging(config.log_level()?)
}
