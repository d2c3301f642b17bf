// src/logging.rs

//! Stderr logging through `tracing-subscriber`'s `EnvFilter`.
//!
//! `--log-level` wins and applies to this crate only (dependencies stay at
//! `warn`). Without it, `CMDSTATUS_LOG` is read as a full filter directive
//! list, e.g. `cmdstatus::engine=trace,info`. If neither is set, `info`.

use anyhow::{Result, anyhow};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "CMDSTATUS_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let directives = filter_directives(cli_level, env.as_deref());

    let (filter, rejected) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_DIRECTIVES), Some((directives, e))),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    if let Some((directives, e)) = rejected {
        warn!(%directives, error = %e, "ignoring invalid {LOG_ENV}");
    }
    Ok(())
}

/// Filter directives for the given flag and environment value.
fn filter_directives(cli_level: Option<LogLevel>, env: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return format!("warn,cmdstatus={}", level_name(level));
    }
    match env.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

fn level_name(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        assert_eq!(
            filter_directives(Some(LogLevel::Debug), Some("trace")),
            "warn,cmdstatus=debug"
        );
    }

    #[test]
    fn environment_is_a_directive_list() {
        let directives = filter_directives(None, Some(" cmdstatus::engine=TRACE,info "));
        assert_eq!(directives, "cmdstatus::engine=TRACE,info");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn blank_or_missing_environment_means_info() {
        assert_eq!(filter_directives(None, None), "info");
        assert_eq!(filter_directives(None, Some("  ")), "info");
    }

    #[test]
    fn garbage_directives_are_rejected_by_the_filter() {
        let directives = filter_directives(None, Some("cmdstatus=loud"));
        assert!(EnvFilter::try_new(&directives).is_err());
    }
}
