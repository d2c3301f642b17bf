// src/config/validate.rs

use std::path::PathBuf;

use crate::config::model::{IndicatorConfig, RawConfigFile};
use crate::errors::{CmdStatusError, Result};

impl TryFrom<RawConfigFile> for IndicatorConfig {
    type Error = CmdStatusError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let command = match raw.indicator.command {
            Some(cmd) if !cmd.trim().is_empty() => cmd,
            _ => {
                return Err(CmdStatusError::ConfigError(
                    "[indicator].command must be set (or pass --command)".to_string(),
                ));
            }
        };

        let interval_secs = u64::try_from(raw.indicator.interval)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(CmdStatusError::invalid_interval)?;

        let config = IndicatorConfig {
            command_path: PathBuf::from(command),
            interval_secs,
        };
        validate_config(&config)?;
        Ok(config)
    }
}

/// Check an already-built config, e.g. one coming from a settings update.
pub fn validate_config(config: &IndicatorConfig) -> Result<()> {
    if config.command_path.as_os_str().is_empty() {
        return Err(CmdStatusError::ConfigError(
            "command path must not be empty".to_string(),
        ));
    }
    if config.interval_secs == 0 {
        return Err(CmdStatusError::invalid_interval());
    }
    Ok(())
}

/// Parse a user-typed interval in seconds.
///
/// Anything that is not a positive integer is rejected with
/// [`CmdStatusError::InvalidInterval`].
pub fn parse_interval(input: &str) -> Result<u64> {
    match input.trim().parse::<i64>() {
        Ok(secs) if secs > 0 => Ok(secs as u64),
        _ => Err(CmdStatusError::invalid_interval()),
    }
}
