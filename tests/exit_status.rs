// tests/exit_status.rs
//
// Process-level behaviour of the `benchseq` binary.
#![cfg(unix)]

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn benchseq(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchseq"))
        .current_dir(dir.path())
        .args(args)
        .env_remove("BENCHSEQ_LOG")
        .output()
        .expect("failed to run benchseq binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn aborted_run_still_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = benchseq(
        &dir,
        &["--color", "never", "--", "echo hello", "exit 1", "echo world"],
    );

    assert_eq!(out.status.code(), Some(0));
    let printed = stdout(&out);
    assert!(printed.contains("hello"));
    assert!(printed.contains("command exited with status 1"));
    assert!(!printed.contains("world"));
}

#[test]
fn completed_run_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = benchseq(&dir, &["--", "echo one", "echo two"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "one\ntwo\n");
}

#[test]
fn propagate_failure_flag_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = benchseq(&dir, &["--propagate-failure", "--", "false", "echo skipped"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!stdout(&out).contains("skipped"));
}

#[test]
fn config_file_drives_the_run_and_creates_output_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Benchseq.toml"),
        r#"
[config]
output_dir = "logs/run1"

[[command]]
name = "build"
cmd = "echo building"

[[command]]
cmd = "{ echo timing; echo profile >&2; } 2>> {output_dir}/bench.log"
"#,
    )
    .unwrap();

    let out = benchseq(&dir, &[]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "building\ntiming\n");
    let log = fs::read_to_string(dir.path().join("logs/run1/bench.log")).unwrap();
    assert_eq!(log, "profile\n");
}

#[test]
fn invalid_config_exits_one_before_running_anything() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.toml"),
        "[report]\nmax_lines = 5\nhead = 10\ntail = 10\n\n[[command]]\ncmd = \"touch ran\"\n",
    )
    .unwrap();

    let out = benchseq(&dir, &["--config", "bad.toml"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("benchseq error"));
    assert!(!dir.path().join("ran").exists());
}

#[test]
fn no_commands_is_an_error() {
    let dir = TempDir::new().unwrap();
    let out = benchseq(&dir, &[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn dry_run_executes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = benchseq(&dir, &["--dry-run", "--", "touch ran"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("touch ran"));
    assert!(!dir.path().join("ran").exists());
}
