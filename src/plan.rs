// src/plan.rs

//! Resolve CLI arguments and config into the run to perform.
//!
//! Command source: positional CLI commands if any, otherwise the config's
//! `[[command]]` entries, in file order.
//!
//! Timeout precedence: per-command `timeout`, then `--timeout`, then
//! `[config].default_timeout`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::errors::{BenchseqError, Result};
use crate::exec::CommandSpec;
use crate::report::TruncationPolicy;
use crate::types::ColorChoice;

/// Placeholder replaced by the output directory in command strings.
pub const OUTPUT_DIR_PLACEHOLDER: &str = "{output_dir}";

/// Everything needed to execute one run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub commands: Vec<CommandSpec>,
    pub output_dir: Option<PathBuf>,
    pub propagate_failure: bool,
    pub policy: TruncationPolicy,
    pub color: ColorChoice,
}

impl RunPlan {
    pub fn resolve(args: &CliArgs, cfg: &ConfigFile) -> Result<Self> {
        let output_dir = args
            .output_dir
            .clone()
            .or_else(|| cfg.config.output_dir.clone());
        let fallback_timeout = args.timeout.or(cfg.default_timeout());

        let commands: Vec<CommandSpec> = if args.commands.is_empty() {
            cfg.commands
                .iter()
                .enumerate()
                .map(|(i, c)| -> Result<CommandSpec> {
                    let spec = CommandSpec::new(expand_output_dir(&c.cmd, output_dir.as_deref())?)
                        .with_timeout(cfg.command_timeout(i).or(fallback_timeout));
                    Ok(match &c.name {
                        Some(name) => spec.with_name(name.clone()),
                        None => spec,
                    })
                })
                .collect::<Result<_>>()?
        } else {
            args.commands
                .iter()
                .map(|cmd| -> Result<CommandSpec> {
                    if cmd.trim().is_empty() {
                        return Err(BenchseqError::ConfigError(
                            "empty command given on the command line".to_string(),
                        ));
                    }
                    Ok(CommandSpec::new(expand_output_dir(cmd, output_dir.as_deref())?)
                        .with_timeout(fallback_timeout))
                })
                .collect::<Result<_>>()?
        };

        if commands.is_empty() {
            return Err(BenchseqError::ConfigError(
                "no commands to run: pass them as arguments or add [[command]] entries to the config"
                    .to_string(),
            ));
        }

        Ok(Self {
            commands,
            output_dir,
            propagate_failure: args.propagate_failure || cfg.config.propagate_failure,
            policy: cfg.report.into(),
            color: args.color.unwrap_or(cfg.config.color),
        })
    }
}

/// Substitute every `{output_dir}` in `cmd`.
///
/// Using the placeholder without an output directory is a config error.
pub fn expand_output_dir(cmd: &str, output_dir: Option<&Path>) -> Result<String> {
    if !cmd.contains(OUTPUT_DIR_PLACEHOLDER) {
        return Ok(cmd.to_string());
    }

    let dir = output_dir.ok_or_else(|| {
        BenchseqError::ConfigError(format!(
            "command '{cmd}' uses {OUTPUT_DIR_PLACEHOLDER} but no output directory is configured"
        ))
    })?;

    Ok(cmd.replace(OUTPUT_DIR_PLACEHOLDER, &dir.to_string_lossy()))
}

/// Create the output directory (and parents) if it doesn't exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        info!(dir = %dir.display(), "creating output directory");
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
