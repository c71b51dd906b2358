//! Log subscriber setup
//!
//! Logs go to stderr so stdout stays reserved for the display output.

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.log_directive()))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global `tracing` subscriber
pub fn init_tracing(verbosity: Verbosity, json: bool) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };
    result.map_err(|e| CliError::config(format!("cannot install log subscriber: {e}")))
}
