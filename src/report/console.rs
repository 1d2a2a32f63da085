// src/report/console.rs

//! Console rendering of command results.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::exec::ExecutionResult;
use crate::report::truncate::{Excerpt, TruncationPolicy, abridge};

/// Writes each command's output to a console-like sink.
///
/// Stdout is printed plain, stderr (only ever present on failure) is
/// printed after it and highlighted in red when color is enabled.
pub struct ConsoleReporter<W: Write> {
    out: W,
    policy: TruncationPolicy,
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, policy: TruncationPolicy, color: bool) -> Self {
        Self { out, policy, color }
    }

    /// Print the (possibly abridged) output of one command.
    pub fn report(&mut self, result: &ExecutionResult) -> io::Result<()> {
        let stdout = abridge(result.stdout(), self.policy);
        if !stdout.is_empty() {
            write!(self.out, "{stdout}")?;
        }

        let stderr = abridge(result.stderr(), self.policy);
        if !stderr.is_empty() {
            self.write_highlighted(&stderr)?;
        }

        self.out.flush()
    }

    fn write_highlighted(&mut self, excerpt: &Excerpt<'_>) -> io::Result<()> {
        if !self.color {
            return write!(self.out, "{excerpt}");
        }
        // Color per line so a reset lands before every newline.
        for line in excerpt.to_string().lines() {
            writeln!(self.out, "{}", line.red())?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
