use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use benchseq::exec::{CommandExecutor, CommandSpec, ExecutionResult};

/// A fake executor that:
/// - records which commands were "run", in order
/// - returns a scripted result per command string, or `success("")`.
#[derive(Default)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<String>>>,
    scripted: HashMap<String, ExecutionResult>,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            scripted: HashMap::new(),
        }
    }

    /// Make `cmd` return `result` instead of an empty success.
    pub fn script(mut self, cmd: &str, result: ExecutionResult) -> Self {
        self.scripted.insert(cmd.to_string(), result);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let result = self
            .scripted
            .get(&command.cmd)
            .cloned()
            .unwrap_or_else(|| ExecutionResult::success(""));

        Box::pin(async move {
            executed.lock().unwrap().push(command.cmd.clone());
            result
        })
    }
}
