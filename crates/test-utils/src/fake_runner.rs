use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cmdstatus::exec::{CommandResult, CommandRunner, RunFuture, RunOutcome};
use tokio::sync::Semaphore;

/// A fake runner that:
/// - records every path it was asked to run
/// - returns queued outcomes in order, then a fixed fallback
/// - optionally holds each run until the test releases it.
#[derive(Clone)]
pub struct ScriptedRunner {
    script: Arc<Mutex<VecDeque<RunOutcome>>>,
    fallback: Arc<Mutex<RunOutcome>>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedRunner {
    /// Every run succeeds immediately with `<txt>ok</txt>`.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(RunOutcome::Finished(CommandResult::exited(
                0,
                "<txt>ok</txt>\n",
                "",
            )))),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Runs block until [`ScriptedRunner::release`] hands out a permit.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::new()
        }
    }

    pub fn push(&self, outcome: RunOutcome) -> &Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }

    pub fn set_fallback(&self, outcome: RunOutcome) {
        *self.fallback.lock().unwrap() = outcome;
    }

    /// Let `n` blocked (or future) runs complete.
    pub fn release(&self, n: usize) {
        if let Some(ref gate) = self.gate {
            gate.add_permits(n);
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, path: &Path, _args: &[String]) -> RunFuture {
        self.calls.lock().unwrap().push(path.to_path_buf());

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone());
        let gate = self.gate.clone();

        Box::pin(async move {
            if let Some(gate) = gate {
                gate.acquire().await.expect("gate closed").forget();
            }
            outcome
        })
    }
}
