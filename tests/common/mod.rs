#![allow(dead_code)]

use cmdstatus::config::{IndicatorConfig, SharedConfig};

pub use cmdstatus_test_utils::{RecordingDisplay, ScriptedRunner, init_tracing, with_timeout};

pub fn shared_config(path: &str, interval_secs: u64) -> SharedConfig {
    SharedConfig::new(IndicatorConfig::new(path, interval_secs))
}
