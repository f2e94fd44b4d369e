//! Tracing setup.

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a subscriber that writes to `cli.log_file`.
///
/// `RUST_LOG` takes precedence over `--log-filter`. A second call is a
/// no-op.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
