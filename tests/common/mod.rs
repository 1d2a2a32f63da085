#![allow(dead_code)]

pub use benchseq_test_utils::builders;
pub use benchseq_test_utils::fake_executor::FakeExecutor;
pub use benchseq_test_utils::{init_tracing, run_captured, with_timeout};

use benchseq::exec::CommandSpec;

pub fn specs(cmds: &[&str]) -> Vec<CommandSpec> {
    cmds.iter().map(|c| CommandSpec::new(*c)).collect()
}
