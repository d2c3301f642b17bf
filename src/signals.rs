// src/signals.rs

//! OS signal wiring for the binary.
//!
//! - Ctrl-C / SIGTERM → shutdown
//! - SIGUSR1 → refresh now
//! - SIGHUP → reload the config file and apply it as new settings

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::config::{ConfigOverrides, IndicatorConfig, load_effective};
use crate::engine::DriverHandle;
use crate::errors::Result;

/// Where settings come from on reload: the same file and CLI overrides used
/// at startup.
#[derive(Debug, Clone, Default)]
pub struct ReloadSource {
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

impl ReloadSource {
    pub fn load(&self) -> Result<IndicatorConfig> {
        load_effective(self.config_path.as_deref(), &self.overrides)
    }
}

/// Re-read the configuration and hand it to the driver.
///
/// Invalid configuration is reported and the current settings stay.
pub async fn reload_settings(handle: &DriverHandle, source: &ReloadSource) {
    let result = match source.load() {
        Ok(config) => handle.update_settings(config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        error!("settings not applied: {e}");
    }
}

pub fn spawn_signal_handlers(handle: DriverHandle, reload: ReloadSource) {
    {
        let handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl+C: {e}");
                return;
            }
            info!("Ctrl+C received");
            let _ = handle.shutdown().await;
        });
    }

    #[cfg(unix)]
    spawn_unix_handlers(handle, reload);

    #[cfg(not(unix))]
    let _ = (handle, reload);
}

#[cfg(unix)]
fn spawn_unix_handlers(handle: DriverHandle, reload: ReloadSource) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to listen for SIGTERM: {e}");
            return;
        }
    };
    let mut usr1 = match signal(SignalKind::user_defined1()) {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to listen for SIGUSR1: {e}");
            return;
        }
    };
    let mut hup = match signal(SignalKind::hangup()) {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to listen for SIGHUP: {e}");
            return;
        }
    };

    tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(()) = term.recv() => {
                    info!("SIGTERM received");
                    let _ = handle.shutdown().await;
                    break;
                }
                Some(()) = usr1.recv() => {
                    info!("SIGUSR1 received; refreshing");
                    if handle.refresh().await.is_err() {
                        break;
                    }
                }
                Some(()) = hup.recv() => {
                    info!("SIGHUP received; reloading configuration");
                    reload_settings(&handle, &reload).await;
                }
                else => break,
            }
        }
    });
}
