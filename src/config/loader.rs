// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigOverrides, IndicatorConfig, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked configuration.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<IndicatorConfig> {
    let raw_config = load_from_path(&path)?;
    let config = IndicatorConfig::try_from(raw_config)?;
    Ok(config)
}

/// Build the effective configuration from an optional file plus CLI overrides.
///
/// - An explicit `path` must exist and parse.
/// - Without one, [`default_config_path`] is used if present; otherwise the
///   built-in defaults apply and `--command` has to supply the script.
pub fn load_effective(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<IndicatorConfig> {
    let mut raw = match path {
        Some(p) => load_from_path(p)?,
        None => {
            let default_path = default_config_path();
            if default_path.is_file() {
                debug!(path = %default_path.display(), "using default config file");
                load_from_path(&default_path)?
            } else {
                RawConfigFile::default()
            }
        }
    };

    overrides.apply(&mut raw);
    IndicatorConfig::try_from(raw)
}

/// Default config location: `Cmdstatus.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Cmdstatus.toml")
}
