//! Tracing subscriber setup for the server binary.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `filter`.
///
/// An unparsable filter falls back to `info`. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
