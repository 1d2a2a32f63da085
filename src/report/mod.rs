// src/report/mod.rs

//! Console reporting policy.
//!
//! - [`truncate`] decides which lines of a long output block are shown.
//! - [`console`] writes stdout plain and stderr highlighted.

pub mod console;
pub mod truncate;

pub use console::ConsoleReporter;
pub use truncate::{Excerpt, SEPARATOR, TruncationPolicy, abridge};
