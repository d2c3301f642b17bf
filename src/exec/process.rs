// src/exec/process.rs

//! Single process execution with full stdout/stderr capture.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::result::CommandResult;

/// Spawn `path` with `args` and wait until the process has exited and both
/// of its output streams have reached end-of-stream.
///
/// Never fails: a spawn error becomes a `CommandResult` with
/// `succeeded = false` and the reason in `stderr`.
///
/// The child is not killed if this future is dropped; tokio reaps it in the
/// background once it exits.
pub async fn run_process(path: &Path, args: &[String]) -> CommandResult {
    info!(path = %path.display(), ?args, "starting command");

    let mut cmd = Command::new(path);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(false);

    // Own process group: terminal job-control signals (Ctrl-C, Ctrl-Z) sent
    // to our foreground group do not reach the script.
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to spawn command");
            return CommandResult::spawn_failure(format!("Failed to spawn command: {e}"));
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Exit and both EOFs can happen in any order.
    let (status, stdout, stderr) = tokio::join!(
        child.wait(),
        read_stream(stdout, "stdout"),
        read_stream(stderr, "stderr"),
    );

    match status {
        Ok(status) => {
            let code = status.code().unwrap_or(-1);
            info!(
                path = %path.display(),
                exit_code = code,
                success = status.success(),
                "command exited"
            );
            CommandResult::exited(code, stdout, stderr)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to wait for command");
            CommandResult {
                succeeded: false,
                exit_code: -1,
                stdout,
                stderr: format!("{stderr}Failed to wait for command: {e}"),
            }
        }
    }
}

/// Read a stream line by line until EOF, joining lines with `\n`.
///
/// A read error ends the stream early; whatever was read before is kept.
pub(crate) async fn read_stream<R>(stream: Option<R>, name: &'static str) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(stream) = stream else {
        return String::new();
    };

    let mut lines = BufReader::new(stream).lines();
    let mut output = String::new();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                debug!(stream = name, "{}", line);
                output.push_str(&line);
                output.push('\n');
            }
            Ok(None) => break,
            Err(e) => {
                warn!(stream = name, error = %e, "error reading stream; keeping partial output");
                break;
            }
        }
    }

    output
}
