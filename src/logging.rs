//! Process-wide logging switch
//!
//! Installs a `tracing_subscriber` formatter. A `RUST_LOG` directive in the
//! environment still applies on top of the chosen level.

use crate::error::{Error, Result};
use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::from(level).into())
}

/// Install the global subscriber, failing if one is already set
pub fn try_init(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install logger: {e}")))
}

/// Install the global subscriber; later calls are ignored
pub fn init(level: LogLevel) {
    let _ = try_init(level);
}
