// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The sequence runner talks to a `CommandExecutor` instead of spawning
//! processes itself. Production code uses [`ShellExecutor`]; tests can
//! provide an implementation that records calls and returns scripted
//! results without touching the OS.

use std::future::Future;
use std::pin::Pin;

use crate::exec::command::{CommandSpec, run_command};
use crate::exec::result::ExecutionResult;

/// Trait abstracting how a single command is executed.
pub trait CommandExecutor: Send {
    /// Run `command` to completion and return its normalized result.
    ///
    /// Implementations must not fail: every outcome, including "could not
    /// start", is expressed through [`ExecutionResult`].
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>>;
}

/// Real executor: runs each command through the platform shell in its own
/// process group.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(run_command(command))
    }
}
