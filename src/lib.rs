// src/lib.rs

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod parse;
pub mod signals;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ConfigOverrides, IndicatorConfig, SharedConfig, load_effective};
use crate::display::JsonLinesDisplay;
use crate::engine::{Driver, DriverOptions};
use crate::exec::ProcessRunner;
use crate::signals::{ReloadSource, spawn_signal_handlers};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file + CLI overrides)
/// - the process runner and the stdout JSON display
/// - the driver loop
/// - signal handling (shutdown, refresh, reload)
pub async fn run(args: CliArgs) -> Result<()> {
    let reload = ReloadSource {
        config_path: args.config.as_ref().map(PathBuf::from),
        overrides: ConfigOverrides {
            command: args.command.clone(),
            interval: args.interval,
        },
    };
    let cfg = load_effective(reload.config_path.as_deref(), &reload.overrides)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let options = DriverOptions {
        exit_after_first_cycle: args.once,
    };
    let display = JsonLinesDisplay::new(std::io::stdout());
    let (driver, handle) = Driver::new(ProcessRunner::new(), display, SharedConfig::new(cfg), options);

    spawn_signal_handlers(handle, reload);

    driver.run().await?;
    Ok(())
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &IndicatorConfig) {
    println!("cmdstatus dry-run");
    println!("  command  = {}", cfg.command_path.display());
    println!("  interval = {}s", cfg.interval_secs);
    if !cfg.command_path.exists() {
        println!("  (command does not exist yet; the indicator will show \"Script not found\")");
    }

    debug!("dry-run complete (no execution)");
}
