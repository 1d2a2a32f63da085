#![allow(dead_code)]

use benchseq::config::{CommandConfig, ConfigFile, RawConfigFile, ReportSection};
use benchseq::types::ColorChoice;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_command(mut self, command: CommandConfig) -> Self {
        self.config.commands.push(command);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.config.config.output_dir = Some(dir.into());
        self
    }

    pub fn with_default_timeout(mut self, timeout: &str) -> Self {
        self.config.config.default_timeout = Some(timeout.to_string());
        self
    }

    pub fn propagate_failure(mut self, val: bool) -> Self {
        self.config.config.propagate_failure = val;
        self
    }

    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.config.config.color = choice;
        self
    }

    pub fn with_report(mut self, max_lines: usize, head: usize, tail: usize) -> Self {
        self.config.report = ReportSection {
            max_lines,
            head,
            tail,
        };
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CommandConfig`.
pub struct CommandConfigBuilder {
    command: CommandConfig,
}

impl CommandConfigBuilder {
    pub fn new(cmd: &str) -> Self {
        Self {
            command: CommandConfig {
                cmd: cmd.to_string(),
                name: None,
                timeout: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.command.name = Some(name.to_string());
        self
    }

    pub fn timeout(mut self, timeout: &str) -> Self {
        self.command.timeout = Some(timeout.to_string());
        self
    }

    pub fn build(self) -> CommandConfig {
        self.command
    }
}
