// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the commands of the
//! sequence, using `tokio::process::Command`, and handing back a normalized
//! [`ExecutionResult`].
//!
//! - [`command`] spawns one shell command in its own process group, captures
//!   both pipes and enforces an optional timeout.
//! - [`result`] defines `ExecutionResult` and its success/failure rule.
//! - [`backend`] provides the `CommandExecutor` trait and the production
//!   `ShellExecutor`, which tests can replace with a fake implementation.

pub mod backend;
pub mod command;
pub mod result;

pub use backend::{CommandExecutor, ShellExecutor};
pub use command::{CommandSpec, run_command};
pub use result::ExecutionResult;
