// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`result`] holds the values a run produces (`CommandResult`, `RunOutcome`).
//! - [`process`] spawns one process with `tokio::process::Command` and
//!   collects both output streams.
//! - [`backend`] provides the `CommandRunner` trait the driver talks to and
//!   the production `ProcessRunner`; tests replace it with a scripted fake.

pub mod backend;
pub mod process;
pub mod result;

pub use backend::{CommandRunner, ProcessRunner, RunFuture};
pub use process::run_process;
pub use result::{CommandResult, RunOutcome};
