pub mod fake_runner;
pub mod recording_display;

pub use fake_runner::ScriptedRunner;
pub use recording_display::RecordingDisplay;

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter for test runs: driver internals at `debug`, the rest at
/// `info`. Override with `CMDSTATUS_LOG`.
const TEST_DIRECTIVES: &str = "cmdstatus=debug,info";

/// Install a capturing subscriber for the current test binary.
///
/// Output goes through the test writer, so it only shows for failing tests.
/// Later calls find a subscriber already installed and do nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CMDSTATUS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(TEST_DIRECTIVES));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}

/// Fail the test if `f` takes longer than five seconds (real time).
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("timed out after 5 seconds")
}
