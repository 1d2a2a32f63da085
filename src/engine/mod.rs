// src/engine/mod.rs

//! Orchestration engine for benchseq.
//!
//! The pure state machine lives in [`state`]; the async loop that drives an
//! executor and the console reporter is implemented in [`runner`].

pub mod runner;
pub mod state;

pub use runner::{RunOutcome, RunSummary, SequenceRunner};
pub use state::{RunMachine, RunState};
