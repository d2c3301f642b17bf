// src/config/model.rs

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::Deserialize;

/// Default update interval: 15 minutes.
pub const DEFAULT_INTERVAL_SECS: u64 = 900;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [indicator]
/// command = "/home/me/bin/weather.sh"
/// interval = 900
/// ```
///
/// All sections are optional; `command` must come from either the file or
/// the `--command` flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub indicator: IndicatorSection,
}

/// `[indicator]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorSection {
    /// Absolute path of the script to execute.
    #[serde(default)]
    pub command: Option<String>,

    /// Seconds between two cycles.
    ///
    /// Kept signed so that negative values reach validation (and get the
    /// user-facing message) instead of failing inside the TOML decoder.
    #[serde(default = "default_interval")]
    pub interval: i64,
}

fn default_interval() -> i64 {
    DEFAULT_INTERVAL_SECS as i64
}

impl Default for IndicatorSection {
    fn default() -> Self {
        Self {
            command: None,
            interval: default_interval(),
        }
    }
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub command: Option<String>,
    pub interval: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, raw: &mut RawConfigFile) {
        if let Some(ref command) = self.command {
            raw.indicator.command = Some(command.clone());
        }
        if let Some(interval) = self.interval {
            raw.indicator.interval = i64::try_from(interval).unwrap_or(i64::MAX);
        }
    }
}

/// Validated configuration consumed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorConfig {
    pub command_path: PathBuf,
    pub interval_secs: u64,
}

impl IndicatorConfig {
    pub fn new(command_path: impl Into<PathBuf>, interval_secs: u64) -> Self {
        Self {
            command_path: command_path.into(),
            interval_secs,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Configuration shared between the driver and whoever edits settings.
///
/// The driver re-reads it at the start of every cycle and whenever it arms
/// the next timer.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    inner: Arc<RwLock<IndicatorConfig>>,
}

impl SharedConfig {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    pub fn get(&self) -> IndicatorConfig {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, config: IndicatorConfig) {
        match self.inner.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }
}
