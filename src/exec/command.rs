// src/exec/command.rs

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::exec::result::{ExecutionResult, UNKNOWN_EXIT_CODE};

/// How long to keep draining pipes after a timed-out process group was
/// killed. A descendant that escaped the group could otherwise hold the
/// pipe open forever.
const DRAIN_AFTER_KILL: Duration = Duration::from_secs(1);

/// One entry of the command sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Shell string passed verbatim to `sh -c`.
    pub cmd: String,
    /// Optional display label.
    pub name: Option<String>,
    /// Kill the process group if the command runs longer than this.
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            name: None,
            timeout: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Name if set, otherwise the command string itself.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.cmd)
    }
}

/// Run a single command to completion and normalize the outcome.
///
/// Never fails: spawn and wait errors become a failed [`ExecutionResult`]
/// with exit code `-1`; they are also logged via `tracing::error!`.
pub async fn run_command(spec: &CommandSpec) -> ExecutionResult {
    match run_command_inner(spec).await {
        Ok(result) => result,
        Err(err) => {
            error!(command = %spec.label(), error = %err, "command execution error");
            ExecutionResult::failure(UNKNOWN_EXIT_CODE, format!("{err:#}"))
        }
    }
}

async fn run_command_inner(spec: &CommandSpec) -> Result<ExecutionResult> {
    info!(command = %spec.label(), cmd = %spec.cmd, "starting command process");

    let mut cmd = shell_command(&spec.cmd);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // New process group: the command and everything it spawns can be
    // signalled as a unit.
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for command '{}'", spec.label()))?;

    let stdout_task = spawn_reader(child.stdout.take());
    let stderr_task = spawn_reader(child.stderr.take());

    let status = match spec.timeout {
        None => Some(wait(&mut child, spec).await?),
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(status) => Some(status.with_context(|| {
                format!("waiting for process of command '{}'", spec.label())
            })?),
            Err(_) => {
                warn!(
                    command = %spec.label(),
                    timeout = ?limit,
                    "command exceeded its timeout; killing process group"
                );
                kill_process_group(&mut child, spec);
                wait(&mut child, spec).await?;
                None
            }
        },
    };

    let Some(status) = status else {
        // Drain with a bound: a descendant outside the group may keep a pipe open.
        let stderr = match tokio::time::timeout(DRAIN_AFTER_KILL, stderr_task).await {
            Ok(joined) => collect(joined, "stderr")?,
            Err(_) => String::new(),
        };
        stdout_task.abort();
        return Ok(ExecutionResult::timed_out(spec.timeout.unwrap_or_default(), stderr));
    };

    let stdout = collect(stdout_task.await, "stdout")?;
    let stderr = collect(stderr_task.await, "stderr")?;

    let code = status.code().unwrap_or(UNKNOWN_EXIT_CODE);
    info!(
        command = %spec.label(),
        exit_code = code,
        success = status.success(),
        "command process exited"
    );

    Ok(normalize(status, stdout, stderr))
}

/// Build a shell command appropriate for the platform.
fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    }
}

async fn wait(child: &mut Child, spec: &CommandSpec) -> Result<ExitStatus> {
    child
        .wait()
        .await
        .with_context(|| format!("waiting for process of command '{}'", spec.label()))
}

fn spawn_reader<R>(pipe: Option<R>) -> JoinHandle<std::io::Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).await?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

fn collect(
    joined: std::result::Result<std::io::Result<String>, tokio::task::JoinError>,
    stream: &str,
) -> Result<String> {
    joined
        .with_context(|| format!("{stream} reader task failed"))?
        .with_context(|| format!("reading {stream} of command"))
}

/// Apply the success/failure channel rule to a finished process.
fn normalize(status: ExitStatus, stdout: String, stderr: String) -> ExecutionResult {
    if status.success() {
        if !stderr.is_empty() {
            debug!(bytes = stderr.len(), "discarding stderr of successful command");
        }
        return ExecutionResult::success(stdout);
    }

    if !stdout.is_empty() {
        debug!(bytes = stdout.len(), "discarding stdout of failed command");
    }

    match status.code() {
        Some(code) => ExecutionResult::failure(code, stderr),
        None => ExecutionResult::failure(UNKNOWN_EXIT_CODE, signal_note(status, stderr)),
    }
}

#[cfg(unix)]
fn signal_note(status: ExitStatus, mut stderr: String) -> String {
    use std::os::unix::process::ExitStatusExt;

    if let Some(sig) = status.signal() {
        if !stderr.is_empty() && !stderr.ends_with('\n') {
            stderr.push('\n');
        }
        stderr.push_str(&format!("command terminated by signal {sig}"));
    }
    stderr
}

#[cfg(not(unix))]
fn signal_note(_status: ExitStatus, stderr: String) -> String {
    stderr
}

#[cfg(unix)]
fn kill_process_group(child: &mut Child, spec: &CommandSpec) {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        // Already reaped; nothing left to signal.
        return;
    };

    if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
        warn!(
            command = %spec.label(),
            pid,
            error = %e,
            "failed to kill process group; killing the shell only"
        );
        if let Err(e) = child.start_kill() {
            warn!(command = %spec.label(), error = %e, "failed to kill child process");
        }
    }
}

#[cfg(not(unix))]
fn kill_process_group(child: &mut Child, spec: &CommandSpec) {
    if let Err(e) = child.start_kill() {
        warn!(command = %spec.label(), error = %e, "failed to kill child process");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::errors::CommandFailure;

    #[tokio::test]
    async fn captures_stdout_and_drops_stderr_on_success() {
        let r = run_command(&CommandSpec::new("echo out; echo noise >&2")).await;
        assert!(r.is_success());
        assert_eq!(r.stdout(), "out\n");
        assert_eq!(r.stderr(), "");
    }

    #[tokio::test]
    async fn captures_stderr_and_drops_stdout_on_failure() {
        let r = run_command(&CommandSpec::new("echo out; echo bad >&2; exit 3")).await;
        assert_eq!(r.exit_code(), 3);
        assert_eq!(r.stdout(), "");
        assert_eq!(r.stderr(), "bad\n");
    }

    #[tokio::test]
    async fn missing_binary_is_a_normal_failure() {
        let r = run_command(&CommandSpec::new("definitely-not-a-real-binary-xyz")).await;
        assert_eq!(r.exit_code(), 127);
        assert!(!r.stderr().is_empty());
    }

    #[tokio::test]
    async fn signal_death_is_reported() {
        let r = run_command(&CommandSpec::new("kill -9 $$")).await;
        assert_eq!(r.exit_code(), UNKNOWN_EXIT_CODE);
        assert!(r.stderr().contains("signal 9"));
    }

    #[tokio::test]
    async fn timeout_kills_the_whole_group() {
        let spec = CommandSpec::new("sleep 30 & sleep 30; wait")
            .with_timeout(Some(Duration::from_millis(200)));

        let started = std::time::Instant::now();
        let r = run_command(&spec).await;

        assert!(started.elapsed() < Duration::from_secs(10));
        assert_eq!(
            r.failure_kind(),
            Some(CommandFailure::TimedOut {
                after: Duration::from_millis(200)
            })
        );
        assert!(r.stderr().contains("timed out"));
    }

    #[test]
    fn label_prefers_name() {
        let spec = CommandSpec::new("make -j8");
        assert_eq!(spec.label(), "make -j8");
        assert_eq!(spec.with_name("build").label(), "build");
    }
}
