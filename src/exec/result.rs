// src/exec/result.rs

//! Normalized outcome of a single command.

use std::time::Duration;

use crate::errors::CommandFailure;

/// Exit code reported for a command killed by its timeout (matches
/// coreutils `timeout`).
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Exit code reported when the process could not be spawned or waited on,
/// or was terminated by a signal.
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Result of running one command.
///
/// Exactly one of two shapes exists:
/// - success: `exit_code == 0`, `stderr` empty, `stdout` whatever was captured;
/// - failure: `exit_code != 0`, `stderr` non-empty, `stdout` empty.
///
/// The constructors enforce this. Output on the "other" channel is dropped
/// here, and a failure with nothing on stderr gets a synthesized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    stdout: String,
    stderr: String,
    exit_code: i32,
    timed_out: Option<Duration>,
}

impl ExecutionResult {
    /// A command that exited with status 0.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
            timed_out: None,
        }
    }

    /// A command that exited with `exit_code`, having written `stderr`.
    ///
    /// A zero code is mapped to [`UNKNOWN_EXIT_CODE`] so the result still
    /// reads as a failure.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        let exit_code = if exit_code == 0 {
            UNKNOWN_EXIT_CODE
        } else {
            exit_code
        };

        let mut stderr = stderr.into();
        if stderr.trim().is_empty() {
            stderr = format!("command exited with status {exit_code}");
        }

        Self {
            stdout: String::new(),
            stderr,
            exit_code,
            timed_out: None,
        }
    }

    /// A command whose process group was killed after `after`.
    pub fn timed_out(after: Duration, stderr: impl Into<String>) -> Self {
        let mut stderr = stderr.into();
        if !stderr.is_empty() && !stderr.ends_with('\n') {
            stderr.push('\n');
        }
        stderr.push_str(&format!("command timed out after {after:?} and was killed"));

        Self {
            stdout: String::new(),
            stderr,
            exit_code: TIMEOUT_EXIT_CODE,
            timed_out: Some(after),
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Classify a failed result; `None` for success.
    pub fn failure_kind(&self) -> Option<CommandFailure> {
        match (self.is_success(), self.timed_out) {
            (true, _) => None,
            (false, Some(after)) => Some(CommandFailure::TimedOut { after }),
            (false, None) => Some(CommandFailure::Exited {
                code: self.exit_code,
            }),
        }
    }
}
