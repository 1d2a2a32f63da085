// src/logging.rs

//! Orchestrator diagnostics for `benchseq`.
//!
//! Stdout belongs to the commands being run: their output and the red
//! failure block. Everything benchseq says about itself (config path, output
//! directory, each command starting and finishing) goes to stderr through
//! `tracing`.
//!
//! The default level is `warn`, so a normal run prints nothing but command
//! output and the failing command's stderr stays the last thing on screen.
//! `--log-level` wins over `BENCHSEQ_LOG`; an unrecognised `BENCHSEQ_LOG`
//! value is ignored.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "BENCHSEQ_LOG";

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(cli_level, std::env::var(LOG_ENV).ok().as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising logging: {e}"))?;

    Ok(())
}

fn resolve_level(cli_level: Option<LogLevel>, env: Option<&str>) -> Level {
    cli_level
        .map(level_from_log_level)
        .or_else(|| env.and_then(parse_level_str))
        .unwrap_or(Level::WARN)
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
