// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod plan;
pub mod report;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, RawConfigFile, load_and_validate, resolve_config_path};
use crate::engine::SequenceRunner;
use crate::exec::ShellExecutor;
use crate::plan::{RunPlan, ensure_output_dir};
use crate::report::ConsoleReporter;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and plan resolution
/// - output directory creation
/// - the shell executor and console reporter
/// - the sequence runner
///
/// Returns the process exit status: 0 unless the run aborted and failure
/// propagation was requested.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_config(args.config.as_deref())?;
    let plan = RunPlan::resolve(&args, &cfg).context("resolving commands to run")?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(0);
    }

    if let Some(dir) = &plan.output_dir {
        ensure_output_dir(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let reporter = ConsoleReporter::new(std::io::stdout(), plan.policy, plan.color.enabled());
    let mut runner = SequenceRunner::new(ShellExecutor::new(), reporter);

    info!(commands = plan.commands.len(), "starting sequence");
    let summary = runner
        .run(&plan.commands)
        .await
        .context("writing command output")?;
    info!(
        executed = summary.executed,
        total = summary.total,
        aborted = summary.is_aborted(),
        "sequence finished"
    );

    Ok(summary.exit_code(plan.propagate_failure))
}

/// Load the explicit config, or `Benchseq.toml` if it exists, or nothing.
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match resolve_config_path(path) {
        Some(path) => load_and_validate(&path)
            .with_context(|| format!("loading config file {}", path.display())),
        None => {
            debug!("no config file; using defaults");
            Ok(ConfigFile::try_from(RawConfigFile::default())?)
        }
    }
}

/// Simple dry-run output: print settings and commands.
fn print_dry_run(plan: &RunPlan) {
    println!("benchseq dry-run");
    if let Some(dir) = &plan.output_dir {
        println!("  output_dir = {}", dir.display());
    }
    println!("  propagate_failure = {}", plan.propagate_failure);
    println!(
        "  report = {} lines max, head {}, tail {}",
        plan.policy.max_lines, plan.policy.head, plan.policy.tail
    );
    println!();

    println!("commands ({}):", plan.commands.len());
    for (i, command) in plan.commands.iter().enumerate() {
        println!("  {}. {}", i + 1, command.label());
        if command.name.is_some() {
            println!("      cmd: {}", command.cmd);
        }
        if let Some(timeout) = command.timeout {
            println!("      timeout: {timeout:?}");
        }
    }

    debug!("dry-run complete (no execution)");
}
