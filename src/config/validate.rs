// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, RawConfigFile, ReportSection};
use crate::errors::{BenchseqError, Result};
use crate::types::parse_duration;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BenchseqError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_report(&raw.report)?;
        validate_commands(&raw)?;

        let default_timeout = raw
            .config
            .default_timeout
            .as_deref()
            .map(|s| parse_timeout(s, "[config].default_timeout"))
            .transpose()?;

        let command_timeouts = raw
            .commands
            .iter()
            .enumerate()
            .map(|(i, c)| {
                c.timeout
                    .as_deref()
                    .map(|s| parse_timeout(s, &format!("command #{} `timeout`", i + 1)))
                    .transpose()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ConfigFile::new_unchecked(raw, default_timeout, command_timeouts))
    }
}

fn validate_report(report: &ReportSection) -> Result<()> {
    if report.max_lines == 0 {
        return Err(BenchseqError::ConfigError(
            "[report].max_lines must be >= 1 (got 0)".to_string(),
        ));
    }

    if report.head + report.tail > report.max_lines {
        return Err(BenchseqError::ConfigError(format!(
            "[report].head + [report].tail must not exceed max_lines ({} + {} > {})",
            report.head, report.tail, report.max_lines
        )));
    }

    Ok(())
}

fn validate_commands(cfg: &RawConfigFile) -> Result<()> {
    for (i, command) in cfg.commands.iter().enumerate() {
        if command.cmd.trim().is_empty() {
            return Err(BenchseqError::ConfigError(format!(
                "command #{} has an empty `cmd`",
                i + 1
            )));
        }
    }
    Ok(())
}

fn parse_timeout(s: &str, what: &str) -> Result<Duration> {
    let duration = parse_duration(s)
        .map_err(|e| BenchseqError::ConfigError(format!("invalid {what}: {e}")))?;

    if duration.is_zero() {
        return Err(BenchseqError::ConfigError(format!(
            "invalid {what}: timeout must be greater than zero"
        )));
    }

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::CommandConfig;

    fn command(cmd: &str, timeout: Option<&str>) -> CommandConfig {
        CommandConfig {
            cmd: cmd.to_string(),
            name: None,
            timeout: timeout.map(str::to_string),
        }
    }

    #[test]
    fn parses_timeouts_per_command() {
        let mut raw = RawConfigFile::default();
        raw.config.default_timeout = Some("1h".to_string());
        raw.commands = vec![command("make", None), command("./bench", Some("90s"))];

        let cfg = ConfigFile::try_from(raw).unwrap();

        assert_eq!(cfg.default_timeout(), Some(Duration::from_secs(3600)));
        assert_eq!(cfg.command_timeout(0), None);
        assert_eq!(cfg.command_timeout(1), Some(Duration::from_secs(90)));
        assert_eq!(cfg.command_timeout(7), None);
    }

    #[test]
    fn rejects_blank_command() {
        let mut raw = RawConfigFile::default();
        raw.commands = vec![command("echo ok", None), command("   ", None)];

        match ConfigFile::try_from(raw) {
            Err(BenchseqError::ConfigError(msg)) => assert!(msg.contains("command #2")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn rejects_window_wider_than_limit() {
        let mut raw = RawConfigFile::default();
        raw.report = ReportSection {
            max_lines: 15,
            head: 10,
            tail: 10,
        };

        assert!(matches!(
            ConfigFile::try_from(raw),
            Err(BenchseqError::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_zero_and_malformed_timeouts() {
        let mut raw = RawConfigFile::default();
        raw.commands = vec![command("make", Some("0s"))];
        assert!(ConfigFile::try_from(raw).is_err());

        let mut raw = RawConfigFile::default();
        raw.config.default_timeout = Some("forever".to_string());
        assert!(ConfigFile::try_from(raw).is_err());
    }
}
