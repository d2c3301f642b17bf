// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

/// Message shown to the user when an interval is rejected.
pub const INVALID_INTERVAL_MESSAGE: &str = "Please enter a positive number";

#[derive(Error, Debug)]
pub enum CmdStatusError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid interval value: {0}")]
    InvalidInterval(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CmdStatusError {
    pub(crate) fn invalid_interval() -> Self {
        CmdStatusError::InvalidInterval(INVALID_INTERVAL_MESSAGE.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CmdStatusError>;
