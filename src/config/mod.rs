// src/config/mod.rs

//! Configuration loading and validation for cmdstatus.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the validated runtime config (`model.rs`).
//! - Load a config file from disk and apply CLI overrides (`loader.rs`).
//! - Validate the command path and interval (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_effective, load_from_path};
pub use model::{
    ConfigOverrides, DEFAULT_INTERVAL_SECS, IndicatorConfig, IndicatorSection, RawConfigFile,
    SharedConfig,
};
pub use validate::{parse_interval, validate_config};
