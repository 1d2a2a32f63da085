// src/engine/runner.rs

//! The sequence runner: execute, report, stop at the first failure.

use std::io::Write;

use tracing::{debug, info};

use crate::engine::state::{RunMachine, RunState};
use crate::errors::{CommandFailure, Result};
use crate::exec::{CommandExecutor, CommandSpec};
use crate::report::ConsoleReporter;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every command exited with status 0.
    Completed,
    /// Command `index` failed and the rest were skipped.
    Aborted {
        index: usize,
        label: String,
        failure: CommandFailure,
    },
}

/// Summary of one pass over the command list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that were started (the failing one included).
    pub executed: usize,
    /// Length of the command list.
    pub total: usize,
    pub outcome: RunOutcome,
}

impl RunSummary {
    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, RunOutcome::Aborted { .. })
    }

    /// Process exit status for this run.
    ///
    /// Always 0 unless `propagate_failure` is set and the run aborted.
    pub fn exit_code(&self, propagate_failure: bool) -> i32 {
        if propagate_failure && self.is_aborted() {
            1
        } else {
            0
        }
    }
}

/// Runs commands strictly one after another through an executor, printing
/// each result through a [`ConsoleReporter`].
pub struct SequenceRunner<E, W>
where
    E: CommandExecutor,
    W: Write,
{
    executor: E,
    reporter: ConsoleReporter<W>,
}

impl<E, W> SequenceRunner<E, W>
where
    E: CommandExecutor,
    W: Write,
{
    pub fn new(executor: E, reporter: ConsoleReporter<W>) -> Self {
        Self { executor, reporter }
    }

    /// Execute `commands` in order.
    ///
    /// A failing command is not an error here: its output is printed and the
    /// summary says the run aborted. `Err` only means the console could not
    /// be written.
    pub async fn run(&mut self, commands: &[CommandSpec]) -> Result<RunSummary> {
        let total = commands.len();
        let mut machine = RunMachine::new(total);

        while let Some(index) = machine.next_command() {
            let command = &commands[index];
            debug!(index, total, command = %command.label(), "executing command");

            let result = self.executor.execute(command).await;
            self.reporter.report(&result)?;
            machine.record(&result);
        }

        let summary = match machine.state() {
            RunState::Aborted { index, failure } => {
                let label = commands[index].label().to_string();
                info!(
                    command = %label,
                    error = %failure,
                    skipped = total - index - 1,
                    "aborting sequence after failed command"
                );
                RunSummary {
                    executed: index + 1,
                    total,
                    outcome: RunOutcome::Aborted {
                        index,
                        label,
                        failure,
                    },
                }
            }
            state => {
                debug!(?state, "sequence finished");
                RunSummary {
                    executed: total,
                    total,
                    outcome: RunOutcome::Completed,
                }
            }
        };

        Ok(summary)
    }

    pub fn into_parts(self) -> (E, ConsoleReporter<W>) {
        (self.executor, self.reporter)
    }
}
