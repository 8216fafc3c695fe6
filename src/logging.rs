//! Tracing subscriber setup for the server binary.
//!
//! `RUST_LOG` takes precedence; otherwise the level comes from the number
//! of `-v` flags given on the command line.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a default filter directive.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init(verbose: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive(verbose)))
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
