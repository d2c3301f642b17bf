// src/exec/result.rs

use std::path::PathBuf;

/// Everything one invocation of the script produced.
///
/// `exit_code` is only meaningful when `succeeded` is true; `succeeded =
/// false` means the process never ran (spawn failure) or its exit status
/// could not be collected. Processes killed by a signal report `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub succeeded: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// A process that ran and exited with `exit_code`.
    pub fn exited(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// A process that could not be started; `reason` ends up in `stderr`.
    pub fn spawn_failure(reason: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            exit_code: -1,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }

    /// True when the output should be parsed and shown.
    pub fn is_success(&self) -> bool {
        self.succeeded && self.exit_code == 0
    }
}

/// Result of asking a runner to execute a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The path did not exist; nothing was spawned.
    NotFound(PathBuf),
    /// A spawn was attempted.
    Finished(CommandResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_exit_of_a_spawned_process_is_success() {
        assert!(CommandResult::exited(0, "", "").is_success());
        assert!(!CommandResult::exited(1, "", "boom").is_success());

        let failed = CommandResult::spawn_failure("permission denied");
        assert!(!failed.is_success());
        assert_eq!(failed.exit_code, -1);
        assert_eq!(failed.stderr, "permission denied");
    }
}
