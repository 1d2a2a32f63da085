pub mod builders;
pub mod fake_executor;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Run a future with a 10-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(10), f)
        .await
        .expect("Test timed out after 10 seconds")
}

/// Run a sequence and return the summary plus everything printed.
pub async fn run_captured<E>(
    executor: E,
    commands: &[benchseq::exec::CommandSpec],
    color: bool,
) -> (benchseq::engine::RunSummary, String, E)
where
    E: benchseq::exec::CommandExecutor,
{
    let reporter = benchseq::report::ConsoleReporter::new(
        Vec::new(),
        benchseq::report::TruncationPolicy::default(),
        color,
    );
    let mut runner = benchseq::engine::SequenceRunner::new(executor, reporter);
    let summary = runner.run(commands).await.expect("writing to a Vec never fails");
    let (executor, reporter) = runner.into_parts();
    let printed = String::from_utf8(reporter.into_inner()).expect("console output is UTF-8");
    (summary, printed, executor)
}
