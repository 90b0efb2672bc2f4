//! Logging init for hosts and tests that want to see the crate's trace events.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pixelbin_url=debug";

/// Install a stderr fmt subscriber honouring `RUST_LOG`.
///
/// Returns Err if a global subscriber is already set, so callers (tests in
/// particular) can ignore repeated initialisation.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!("pixelbin-url logging initialized");
    Ok(())
}
