/// Stderr logging via `tracing-subscriber`, level picked from `-v`.
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a filter directive.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init(verbose: u8) -> Result<()> {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::new(level_for(verbose)))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}
