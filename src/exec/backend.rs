// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The driver talks to a `CommandRunner` instead of spawning processes
//! itself, so tests can count invocations and script results without
//! touching the OS.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tracing::warn;

use crate::fs::{FileSystem, RealFileSystem};

use super::process::run_process;
use super::result::RunOutcome;

/// Future returned by [`CommandRunner::run`].
///
/// `'static` so the driver can hand it to `tokio::spawn` and keep reacting
/// to events while the script runs.
pub type RunFuture = Pin<Box<dyn Future<Output = RunOutcome> + Send + 'static>>;

/// Trait abstracting how the configured script is executed.
pub trait CommandRunner: Send + Sync {
    /// Run `path` with `args` to completion.
    fn run(&self, path: &Path, args: &[String]) -> RunFuture;
}

/// Production runner: existence check, then a real OS process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    fs: Arc<dyn FileSystem>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::with_fs(Arc::new(RealFileSystem))
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, path: &Path, args: &[String]) -> RunFuture {
        let fs = Arc::clone(&self.fs);
        let path: PathBuf = path.to_path_buf();
        let args = args.to_vec();

        Box::pin(async move {
            if !fs.exists(&path) {
                warn!(path = %path.display(), "command file does not exist");
                return RunOutcome::NotFound(path);
            }
            RunOutcome::Finished(run_process(&path, &args).await)
        })
    }
}
