// src/engine/state.rs

//! Pure run state machine.
//!
//! `Pending → Running → {Continuing → Running …, Aborted, Completed}`.
//!
//! No processes, no IO: the async runner asks [`RunMachine::next_command`]
//! what to execute and feeds each result back through
//! [`RunMachine::record`].

use tracing::{debug, warn};

use crate::errors::CommandFailure;
use crate::exec::ExecutionResult;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has been executed yet.
    Pending,
    /// Command `index` is executing.
    Running { index: usize },
    /// Command `next - 1` succeeded; `next` is due.
    Continuing { next: usize },
    /// Command `index` failed; nothing after it runs.
    Aborted { index: usize, failure: CommandFailure },
    /// Every command succeeded.
    Completed { executed: usize },
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Aborted { .. } | RunState::Completed { .. })
    }
}

/// Drives [`RunState`] over a sequence of `total` commands.
#[derive(Debug)]
pub struct RunMachine {
    total: usize,
    state: RunState,
}

impl RunMachine {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            state: RunState::Pending,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Index of the command to execute next, moving to `Running`.
    ///
    /// Returns `None` once the run is terminal. Running out of commands
    /// moves the machine to `Completed`.
    pub fn next_command(&mut self) -> Option<usize> {
        let next = match self.state {
            RunState::Pending => 0,
            RunState::Continuing { next } => next,
            RunState::Running { index } => {
                warn!(index, "next command requested while one is still running");
                return None;
            }
            RunState::Aborted { .. } | RunState::Completed { .. } => return None,
        };

        if next >= self.total {
            self.transition(RunState::Completed { executed: next });
            return None;
        }

        self.transition(RunState::Running { index: next });
        Some(next)
    }

    /// Feed back the result of the running command.
    pub fn record(&mut self, result: &ExecutionResult) {
        let RunState::Running { index } = self.state else {
            warn!(state = ?self.state, "result recorded with no command running; ignoring");
            return;
        };

        let next = match result.failure_kind() {
            None => RunState::Continuing { next: index + 1 },
            Some(failure) => RunState::Aborted { index, failure },
        };
        self.transition(next);
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "run state transition");
        self.state = next;
    }
}
