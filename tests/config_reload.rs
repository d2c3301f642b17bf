// tests/config_reload.rs

mod common;
use crate::common::{RecordingDisplay, ScriptedRunner, init_tracing};

use std::error::Error;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::time::{Duration, sleep};

use cmdstatus::config::{ConfigOverrides, IndicatorConfig, SharedConfig};
use cmdstatus::engine::{Driver, DriverOptions};
use cmdstatus::signals::{ReloadSource, reload_settings};

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(path: &Path, command: &str, interval: i64) -> std::io::Result<()> {
    std::fs::write(
        path,
        format!("[indicator]\ncommand = \"{command}\"\ninterval = {interval}\n"),
    )
}

#[tokio::test(start_paused = true)]
async fn reload_applies_valid_files_and_ignores_invalid_ones() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let config_path = dir.path().join("Cmdstatus.toml");
    write_config(&config_path, "/opt/scripts/a.sh", 900)?;

    let source = ReloadSource {
        config_path: Some(config_path.clone()),
        overrides: ConfigOverrides::default(),
    };
    let runner = ScriptedRunner::new();
    let (driver, handle) = Driver::new(
        runner.clone(),
        RecordingDisplay::new(),
        SharedConfig::new(source.load()?),
        DriverOptions::default(),
    );
    let task = tokio::spawn(driver.run());
    handle.wait_for_status(|s| s.cycles_completed == 1).await?;

    write_config(&config_path, "/opt/scripts/b.sh", 60)?;
    reload_settings(&handle, &source).await;
    handle.wait_for_status(|s| s.cycles_completed == 2).await?;
    assert_eq!(handle.config(), IndicatorConfig::new("/opt/scripts/b.sh", 60));
    assert_eq!(runner.calls().last(), Some(&PathBuf::from("/opt/scripts/b.sh")));

    write_config(&config_path, "/opt/scripts/c.sh", 0)?;
    reload_settings(&handle, &source).await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(handle.config(), IndicatorConfig::new("/opt/scripts/b.sh", 60));
    assert_eq!(runner.call_count(), 2);

    handle.shutdown().await?;
    task.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn cli_overrides_survive_a_reload() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let config_path = dir.path().join("Cmdstatus.toml");
    write_config(&config_path, "/opt/scripts/a.sh", 900)?;

    let source = ReloadSource {
        config_path: Some(config_path.clone()),
        overrides: ConfigOverrides {
            command: Some("/usr/local/bin/battery.sh".to_string()),
            interval: None,
        },
    };
    let runner = ScriptedRunner::new();
    let (driver, handle) = Driver::new(
        runner.clone(),
        RecordingDisplay::new(),
        SharedConfig::new(source.load()?),
        DriverOptions::default(),
    );
    let task = tokio::spawn(driver.run());
    handle.wait_for_status(|s| s.cycles_completed == 1).await?;

    write_config(&config_path, "/opt/scripts/b.sh", 120)?;
    reload_settings(&handle, &source).await;
    handle.wait_for_status(|s| s.cycles_completed == 2).await?;

    assert_eq!(
        handle.config(),
        IndicatorConfig::new("/usr/local/bin/battery.sh", 120)
    );
    assert!(
        runner
            .calls()
            .iter()
            .all(|p| p == Path::new("/usr/local/bin/battery.sh"))
    );

    handle.shutdown().await?;
    task.await??;
    Ok(())
}
