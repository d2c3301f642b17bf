// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::parse_interval;

/// Command-line arguments for `cmdstatus`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdstatus",
    version,
    about = "Periodically run a script and render its <icon>/<txt>/<tool> output as a status indicator.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Cmdstatus.toml` in the current working directory is used
    /// when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Script to execute; overrides `[indicator].command`.
    #[arg(long, value_name = "PATH")]
    pub command: Option<String>,

    /// Update interval in seconds; overrides `[indicator].interval`.
    #[arg(long, value_name = "SECS", value_parser = parse_interval_arg)]
    pub interval: Option<u64>,

    /// Run a single cycle, print the result and exit.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMDSTATUS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate the configuration and print it, but don't run the script.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_interval_arg(s: &str) -> Result<u64, String> {
    parse_interval(s).map_err(|e| e.to_string())
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
