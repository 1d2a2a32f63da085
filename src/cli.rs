// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::types::{ColorChoice, parse_duration};

/// Command-line arguments for `benchseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "benchseq",
    version,
    about = "Run build and benchmark commands in order, stopping at the first failure.",
    long_about = None
)]
pub struct CliArgs {
    /// Commands to run, in order.
    ///
    /// When given, these replace the `[[command]]` entries of the config
    /// file; the rest of the config still applies.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Benchseq.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for command logs; replaces `{output_dir}` in commands.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Time limit for commands without their own `timeout` (e.g. `30m`).
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Exit with status 1 when a command fails (default: always exit 0).
    #[arg(long)]
    pub propagate_failure: bool,

    /// Highlight stderr in color.
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BENCHSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved command list, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
