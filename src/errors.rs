// src/errors.rs

//! Crate-wide error types.
//!
//! [`BenchseqError`] covers failures of the orchestrator itself (bad config,
//! unwritable output directory). A failing *command* is not an error at this
//! level: it is a [`CommandFailure`] carried inside the execution result and
//! handled by the sequence runner.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchseqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Why a command ended the run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFailure {
    /// The process exited with a nonzero status (or could not be run at all,
    /// in which case `code` is `-1`).
    #[error("command exited with status {code}")]
    Exited { code: i32 },

    /// The process group was killed after exceeding its time limit.
    #[error("command timed out after {after:?}")]
    TimedOut { after: Duration },
}

pub type Result<T> = std::result::Result<T, BenchseqError>;
