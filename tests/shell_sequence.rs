// tests/shell_sequence.rs
//
// End-to-end runs through the real shell executor.
#![cfg(unix)]

mod common;
use crate::common::{init_tracing, run_captured, specs, with_timeout};

use std::time::Duration;

use benchseq::engine::RunOutcome;
use benchseq::errors::CommandFailure;
use benchseq::exec::{CommandSpec, ShellExecutor};

#[tokio::test]
async fn hello_then_exit_1_never_prints_world() {
    with_timeout(async {
        init_tracing();

        let (summary, printed, _) = run_captured(
            ShellExecutor::new(),
            &specs(&["echo hello", "exit 1", "echo world"]),
            true,
        )
        .await;

        assert!(printed.starts_with("hello\n"));
        assert!(printed.contains("\u{1b}[31mcommand exited with status 1"));
        assert!(!printed.contains("world"));
        assert_eq!(
            summary.outcome,
            RunOutcome::Aborted {
                index: 1,
                label: "exit 1".to_string(),
                failure: CommandFailure::Exited { code: 1 },
            }
        );
        assert_eq!(summary.exit_code(false), 0);
    })
    .await
}

#[tokio::test]
async fn later_commands_see_earlier_artifacts() {
    with_timeout(async {
        let tmp = tempfile::tempdir().unwrap();
        let artifact = tmp.path().join("artifact");
        let build = format!("echo built > {}", artifact.display());
        let bench = format!("cat {}", artifact.display());

        let (summary, printed, _) = run_captured(
            ShellExecutor::new(),
            &specs(&[build.as_str(), bench.as_str()]),
            false,
        )
        .await;

        assert_eq!(summary.outcome, RunOutcome::Completed);
        assert_eq!(printed, "built\n");
    })
    .await
}

#[tokio::test]
async fn stderr_redirected_to_log_is_not_shown() {
    with_timeout(async {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("bench.log");
        let cmd = format!("{{ echo result; echo profile >&2; }} 2>> {}", log.display());

        let (summary, printed, _) = run_captured(
            ShellExecutor::new(),
            &specs(&[cmd.as_str(), cmd.as_str()]),
            false,
        )
        .await;

        assert_eq!(summary.outcome, RunOutcome::Completed);
        assert_eq!(printed, "result\nresult\n");
        assert_eq!(std::fs::read_to_string(&log).unwrap(), "profile\nprofile\n");
    })
    .await
}

#[tokio::test]
async fn long_failure_output_is_abridged() {
    with_timeout(async {
        let (summary, printed, _) = run_captured(
            ShellExecutor::new(),
            &specs(&["seq 1 5000 >&2; exit 4"]),
            false,
        )
        .await;

        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "1");
        assert_eq!(lines[10], "...");
        assert_eq!(lines[20], "5000");
        assert!(summary.is_aborted());
    })
    .await
}

#[tokio::test]
async fn timed_out_command_aborts_the_sequence() {
    with_timeout(async {
        let commands = vec![
            CommandSpec::new("sleep 30").with_timeout(Some(Duration::from_millis(300))),
            CommandSpec::new("echo after"),
        ];

        let (summary, printed, _) = run_captured(ShellExecutor::new(), &commands, false).await;

        assert!(printed.contains("timed out"));
        assert!(!printed.contains("after\n"));
        assert_eq!(
            summary.outcome,
            RunOutcome::Aborted {
                index: 0,
                label: "sleep 30".to_string(),
                failure: CommandFailure::TimedOut {
                    after: Duration::from_millis(300)
                },
            }
        );
    })
    .await
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn command_leads_its_own_process_group() {
    with_timeout(async {
        // Field 5 of /proc/<pid>/stat is the process group id.
        let cmd = r#"test "$(cut -d' ' -f5 /proc/$$/stat)" = "$$" && echo leader"#;

        let (summary, printed, _) = run_captured(ShellExecutor::new(), &specs(&[cmd]), false).await;

        assert_eq!(summary.outcome, RunOutcome::Completed);
        assert_eq!(printed, "leader\n");
    })
    .await
}
