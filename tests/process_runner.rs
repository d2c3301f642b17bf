// tests/process_runner.rs
#![cfg(unix)]

mod common;
use crate::common::{init_tracing, with_timeout};

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::TempDir;

use cmdstatus::exec::{CommandRunner, ProcessRunner, RunOutcome};

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

async fn run(path: &Path, args: &[String]) -> RunOutcome {
    with_timeout(ProcessRunner::new().run(path, args)).await
}

#[tokio::test]
async fn captures_both_streams_and_exit_code() {
    init_tracing();

    let outcome = run(
        Path::new("/bin/sh"),
        &sh("echo '<txt>hi</txt>'; echo oops >&2; echo '<tool>x</tool>'; exit 3"),
    )
    .await;

    let result = match outcome {
        RunOutcome::Finished(result) => result,
        other => panic!("expected a finished run, got {other:?}"),
    };
    assert!(result.succeeded);
    assert_eq!(result.exit_code, 3);
    assert_eq!(result.stdout, "<txt>hi</txt>\n<tool>x</tool>\n");
    assert_eq!(result.stderr, "oops\n");
}

#[tokio::test]
async fn large_interleaved_output_does_not_deadlock() {
    init_tracing();

    let script = "i=0; while [ $i -lt 5000 ]; do echo out$i; echo err$i >&2; i=$((i+1)); done";
    let RunOutcome::Finished(result) = run(Path::new("/bin/sh"), &sh(script)).await else {
        panic!("expected a finished run");
    };

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout.lines().count(), 5000);
    assert_eq!(result.stderr.lines().count(), 5000);
    assert!(result.stdout.ends_with("out4999\n"));
}

#[tokio::test]
async fn waits_for_streams_to_close_not_just_for_exit() {
    init_tracing();

    // The background subshell keeps stdout open after `sh` itself exits.
    let script = "(sleep 0.2; echo late) & echo early";
    let RunOutcome::Finished(result) = run(Path::new("/bin/sh"), &sh(script)).await else {
        panic!("expected a finished run");
    };

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "early\nlate\n");
}

#[tokio::test]
async fn missing_file_is_reported_as_not_found() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.sh");

    let outcome = run(&path, &[]).await;
    assert_eq!(outcome, RunOutcome::NotFound(path));
}

#[tokio::test]
async fn non_executable_file_is_a_spawn_failure() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.sh");
    std::fs::write(&path, "#!/bin/sh\necho '<txt>never</txt>'\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let RunOutcome::Finished(result) = run(&path, &[]).await else {
        panic!("expected a spawn attempt");
    };
    assert!(!result.succeeded);
    assert_eq!(result.exit_code, -1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.starts_with("Failed to spawn command"));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn script_leads_its_own_process_group() {
    init_tracing();

    // Fields 1 and 5 of /proc/<pid>/stat are the pid and the process group.
    let script = r#"read -r pid _ _ _ pgrp _ < /proc/$$/stat; echo "$pid $pgrp""#;
    let RunOutcome::Finished(result) = run(Path::new("/bin/sh"), &sh(script)).await else {
        panic!("expected a finished run");
    };

    let ids: Vec<&str> = result.stdout.split_whitespace().collect();
    assert_eq!(ids.len(), 2, "unexpected output {:?}", result.stdout);
    assert_eq!(ids[0], ids[1]);
    assert_ne!(ids[1], std::process::id().to_string());
}
