// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::ColorChoice;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// output_dir = "bench_0930"
/// propagate_failure = false
/// default_timeout = "2h"
///
/// [report]
/// max_lines = 100
/// head = 10
/// tail = 10
///
/// [[command]]
/// name = "build"
/// cmd = "BUILD_BENCHMARK=1 BUILD_TPCH=1 make"
///
/// [[command]]
/// cmd = "build/release/benchmark/benchmark_runner 'benchmark/tpch/sf1/.*' 2>> {output_dir}/tpch.log"
/// timeout = "30m"
/// ```
///
/// All sections are optional; an empty file is a valid (if useless) config
/// when commands are supplied on the command line instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Console truncation policy from `[report]`.
    #[serde(default)]
    pub report: ReportSection,

    /// Ordered `[[command]]` entries.
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Directory commands append their logs into. Created before the first
    /// command runs and substituted for `{output_dir}` in command strings.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Exit with status 1 when the run aborts on a failed command.
    ///
    /// Off by default: an aborted run is reported on the console only.
    #[serde(default)]
    pub propagate_failure: bool,

    /// Time limit for commands that don't set their own `timeout`.
    #[serde(default)]
    pub default_timeout: Option<String>,

    /// Whether stderr is highlighted.
    #[serde(default)]
    pub color: ColorChoice,
}

/// `[report]` section.
///
/// Output longer than `max_lines` is shown as the first `head` lines, a
/// `...` separator and the last `tail` lines.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    #[serde(default = "default_head")]
    pub head: usize,

    #[serde(default = "default_tail")]
    pub tail: usize,
}

fn default_max_lines() -> usize {
    100
}

fn default_head() -> usize {
    10
}

fn default_tail() -> usize {
    10
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            head: default_head(),
            tail: default_tail(),
        }
    }
}

/// One `[[command]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// The shell command to execute.
    pub cmd: String,

    /// Optional label used in logs and the abort message.
    #[serde(default)]
    pub name: Option<String>,

    /// Optional time limit (`"500ms"`, `"30s"`, `"10m"`, `"2h"`).
    ///
    /// Overrides `[config].default_timeout`.
    #[serde(default)]
    pub timeout: Option<String>,
}

/// A validated configuration.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`),
/// so duration strings are known to parse and the report window is sane.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub report: ReportSection,
    pub commands: Vec<CommandConfig>,
    default_timeout: Option<Duration>,
    command_timeouts: Vec<Option<Duration>>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        raw: RawConfigFile,
        default_timeout: Option<Duration>,
        command_timeouts: Vec<Option<Duration>>,
    ) -> Self {
        Self {
            config: raw.config,
            report: raw.report,
            commands: raw.commands,
            default_timeout,
            command_timeouts,
        }
    }

    /// Parsed `[config].default_timeout`.
    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout
    }

    /// Parsed per-command `timeout` for the entry at `index`.
    pub fn command_timeout(&self, index: usize) -> Option<Duration> {
        self.command_timeouts.get(index).copied().flatten()
    }
}
