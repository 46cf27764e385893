//! Diagnostic logging for the command-line front end
//!
//! The library only emits `tracing` events. This module installs a subscriber that
//! writes them to stderr, so normal command output on stdout stays clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "SEMANTIC_VERSION_LOG";

/// Pick the filter directive: environment first, then `--verbose`, then config
pub fn filter_directive(config: &LogConfig, verbose: bool) -> String {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => config.level.clone(),
    }
}

/// Initialize the global logging system
pub fn init_logging(config: &LogConfig, verbose: bool, ansi: bool) -> Result<()> {
    let directive = filter_directive(config, verbose);
    let env_filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("invalid log filter '{}': {}", directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
