// src/logging.rs

//! Logging setup for `pollrun` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `POLLRUN_LOG` environment variable (any `EnvFilter` directive)
//! 3. default to `warn`
//!
//! Diagnostics are written to stderr; stdout belongs to the reporter so
//! `--json` output stays machine-readable.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let directive = match cli_level {
        Some(lvl) => lvl.as_str().to_string(),
        None => std::env::var("POLLRUN_LOG").unwrap_or_else(|_| "warn".to_string()),
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter directive: {directive}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
