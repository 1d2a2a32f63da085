// src/report/truncate.rs

//! Bounding long command output for the console.

use std::fmt;

use crate::config::ReportSection;

/// Line printed between the head and tail of an abridged block.
pub const SEPARATOR: &str = "...";

/// When and how to abridge output.
///
/// Text with more than `max_lines` lines is shown as its first `head` lines,
/// [`SEPARATOR`], and its last `tail` lines. Shorter text is shown in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    pub max_lines: usize,
    pub head: usize,
    pub tail: usize,
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        ReportSection::default().into()
    }
}

impl From<ReportSection> for TruncationPolicy {
    fn from(section: ReportSection) -> Self {
        Self {
            max_lines: section.max_lines,
            head: section.head,
            tail: section.tail,
        }
    }
}

/// What to display for one block of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excerpt<'a> {
    /// Nothing was written.
    Empty,
    /// Short enough to show verbatim.
    Full(&'a str),
    /// Head and tail of a long block; `omitted` lines were skipped.
    Window {
        head: Vec<&'a str>,
        tail: Vec<&'a str>,
        omitted: usize,
    },
}

impl<'a> Excerpt<'a> {
    /// The lines that will be displayed, separator included.
    pub fn lines(&self) -> Vec<&'a str> {
        match self {
            Excerpt::Empty => Vec::new(),
            Excerpt::Full(text) => {
                let text: &'a str = text;
                text.lines().collect()
            }
            Excerpt::Window { head, tail, .. } => head
                .iter()
                .copied()
                .chain(std::iter::once(SEPARATOR))
                .chain(tail.iter().copied())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Excerpt::Empty)
    }
}

/// Renders the block, always ending in exactly one newline.
impl fmt::Display for Excerpt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Excerpt::Empty => Ok(()),
            Excerpt::Full(text) => {
                f.write_str(text)?;
                if !text.ends_with('\n') {
                    f.write_str("\n")?;
                }
                Ok(())
            }
            Excerpt::Window { .. } => {
                for line in self.lines() {
                    writeln!(f, "{line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Choose the excerpt of `text` to display under `policy`.
pub fn abridge(text: &str, policy: TruncationPolicy) -> Excerpt<'_> {
    if text.is_empty() {
        return Excerpt::Empty;
    }

    // Blank lines at either end don't count towards the limit.
    let trimmed = text.trim();
    let total = trimmed.lines().count();
    if total <= policy.max_lines {
        return Excerpt::Full(text);
    }

    let head: Vec<&str> = trimmed.lines().take(policy.head).collect();
    let tail: Vec<&str> = trimmed
        .lines()
        .skip(total.saturating_sub(policy.tail))
        .collect();

    Excerpt::Window {
        head,
        tail,
        omitted: total.saturating_sub(policy.head + policy.tail),
    }
}
