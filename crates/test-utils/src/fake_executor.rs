use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use pollwatch::errors::Result;
use pollwatch::exec::{CommandLine, CommandOutcome, ExecutorBackend};

/// A fake executor that:
/// - records the argv of every command it was asked to run
/// - immediately reports the configured outcome.
#[derive(Debug, Clone)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<Vec<String>>>>,
    outcome: CommandOutcome,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::with_outcome(CommandOutcome::Exited(Some(0)))
    }

    pub fn with_outcome(outcome: CommandOutcome) -> Self {
        Self {
            executed: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    /// Shared log of executed argvs; stays valid after the executor is
    /// moved into a monitor.
    pub fn executed(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        Arc::clone(&self.executed)
    }

    pub fn run_count(&self) -> usize {
        self.executed.lock().unwrap().len()
    }
}

impl Default for FakeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let outcome = self.outcome;

        Box::pin(async move {
            {
                let mut guard = executed.lock().unwrap();
                guard.push(cmd.argv().into_iter().map(str::to_string).collect());
            }
            Ok(outcome)
        })
    }
}
