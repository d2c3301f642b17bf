// src/engine/runtime.rs

use std::fmt;

use anyhow::anyhow;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{IndicatorConfig, SharedConfig, parse_interval, validate_config};
use crate::display::IndicatorDisplay;
use crate::errors::{CmdStatusError, Result};
use crate::exec::CommandRunner;

use super::apply::apply_outcome;
use super::core::{DriverCore, DriverStep, Phase};
use super::{DriverCommand, DriverEvent, DriverOptions, TimerId};

/// Snapshot of the driver published after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStatus {
    pub phase: Phase,
    pub pending_timer: Option<TimerId>,
    /// Timer tasks actually alive in the runtime (0 or 1).
    pub armed_timers: usize,
    pub cycles_completed: u64,
}

struct ArmedTimer {
    id: TimerId,
    handle: JoinHandle<()>,
}

/// Drives the core state machine and performs its commands: spawning runs,
/// arming/cancelling timers and applying results to the display.
///
/// This is the IO shell around [`DriverCore`]; all scheduling decisions live
/// in the core.
pub struct Driver<R: CommandRunner, D: IndicatorDisplay> {
    core: DriverCore,
    control_rx: mpsc::Receiver<DriverEvent>,
    internal_tx: mpsc::Sender<DriverEvent>,
    internal_rx: mpsc::Receiver<DriverEvent>,
    runner: R,
    display: D,
    config: SharedConfig,
    timer: Option<ArmedTimer>,
    status_tx: watch::Sender<DriverStatus>,
}

impl<R: CommandRunner, D: IndicatorDisplay> fmt::Debug for Driver<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("core", &self.core)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner, D: IndicatorDisplay> Driver<R, D> {
    /// Build a driver and the handle used to control it.
    ///
    /// Nothing runs until [`Driver::run`] is awaited.
    pub fn new(
        runner: R,
        display: D,
        config: SharedConfig,
        options: DriverOptions,
    ) -> (Self, DriverHandle) {
        let (control_tx, control_rx) = mpsc::channel(16);
        let (internal_tx, internal_rx) = mpsc::channel(16);

        let core = DriverCore::new(options);
        let (status_tx, status_rx) = watch::channel(DriverStatus {
            phase: core.phase(),
            pending_timer: None,
            armed_timers: 0,
            cycles_completed: 0,
        });

        let handle = DriverHandle {
            tx: control_tx,
            config: config.clone(),
            status: status_rx,
        };

        let driver = Self {
            core,
            control_rx,
            internal_tx,
            internal_rx,
            runner,
            display,
            config,
            timer: None,
            status_tx,
        };

        (driver, handle)
    }

    /// Main loop. Runs the first cycle right away and keeps going until
    /// shutdown is requested, every handle is dropped, or (in once mode) the
    /// first cycle has been applied.
    pub async fn run(mut self) -> Result<()> {
        info!(config = ?self.config.get(), "cmdstatus driver started");

        let step = self.core.start();
        self.execute(step);

        loop {
            let event = tokio::select! {
                control = self.control_rx.recv() => match control {
                    Some(e) => e,
                    None => {
                        info!("all driver handles dropped; shutting down");
                        DriverEvent::ShutdownRequested
                    }
                },
                Some(e) = self.internal_rx.recv() => e,
            };

            debug!(?event, "driver received event");

            let step = self.core.step(event);
            if !self.execute(step) {
                info!("driver stopping");
                break;
            }
        }

        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }

        info!("driver exiting");
        Ok(())
    }

    /// Perform all commands of a step; returns whether to keep running.
    fn execute(&mut self, step: DriverStep) -> bool {
        for command in step.commands {
            self.execute_command(command);
        }
        self.publish_status();
        step.keep_running
    }

    fn execute_command(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::CancelTimer(id) => self.cancel_timer(id),
            DriverCommand::StartCycle => self.start_cycle(),
            DriverCommand::Apply(outcome) => apply_outcome(&mut self.display, &outcome),
            DriverCommand::ArmTimer(id) => self.arm_timer(id),
        }
    }

    fn start_cycle(&mut self) {
        // Re-read on every cycle so settings updates take effect.
        let config = self.config.get();
        let run = self.runner.run(&config.command_path, &[]);
        let tx = self.internal_tx.clone();

        tokio::spawn(async move {
            let outcome = run.await;
            if tx.send(DriverEvent::CycleFinished(outcome)).await.is_err() {
                debug!("driver is gone; discarding cycle result");
            }
        });
    }

    fn arm_timer(&mut self, id: TimerId) {
        if let Some(old) = self.timer.take() {
            debug!(timer = %old.id, "replacing leftover timer");
            old.handle.abort();
        }

        let interval = self.config.get().interval();
        let tx = self.internal_tx.clone();
        debug!(timer = %id, ?interval, "arming timer");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let _ = tx.send(DriverEvent::TimerFired { timer: id }).await;
        });

        self.timer = Some(ArmedTimer { id, handle });
    }

    fn cancel_timer(&mut self, id: TimerId) {
        match self.timer.take() {
            Some(timer) => {
                debug!(timer = %timer.id, requested = %id, "cancelling timer");
                timer.handle.abort();
            }
            None => debug!(timer = %id, "no timer to cancel"),
        }
    }

    fn publish_status(&self) {
        let status = DriverStatus {
            phase: self.core.phase(),
            pending_timer: self.core.pending_timer(),
            armed_timers: usize::from(self.timer.is_some()),
            cycles_completed: self.core.cycles_completed(),
        };
        self.status_tx.send_replace(status);
    }
}

/// Control surface of a running [`Driver`].
///
/// Dropping every handle tears the driver down like [`DriverHandle::shutdown`].
#[derive(Debug, Clone)]
pub struct DriverHandle {
    tx: mpsc::Sender<DriverEvent>,
    config: SharedConfig,
    status: watch::Receiver<DriverStatus>,
}

impl DriverHandle {
    /// Run a cycle now; the pending timer is cancelled and re-armed after it.
    pub async fn refresh(&self) -> Result<()> {
        self.send(DriverEvent::RefreshRequested).await
    }

    /// Replace the settings and run a cycle with them right away.
    ///
    /// Invalid settings are rejected and nothing changes.
    pub async fn update_settings(&self, config: IndicatorConfig) -> Result<()> {
        validate_config(&config)?;
        if self.tx.is_closed() {
            return Err(driver_stopped());
        }

        let previous = self.config.get();
        let (command, interval) = (config.command_path.clone(), config.interval_secs);
        self.config.set(config);

        if let Err(e) = self.send(DriverEvent::SettingsChanged).await {
            // Nobody will run with the new settings; keep the old ones.
            self.config.set(previous);
            return Err(e);
        }

        info!(command = %command.display(), interval, "settings updated");
        Ok(())
    }

    /// Settings as typed by a user: a command path and an interval string.
    pub async fn update_settings_from_input(&self, command: &str, interval: &str) -> Result<()> {
        let interval_secs = parse_interval(interval)?;
        self.update_settings(IndicatorConfig::new(command, interval_secs))
            .await
    }

    /// Stop the driver. An in-flight script is left to finish on its own;
    /// its result is discarded.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(DriverEvent::ShutdownRequested).await
    }

    pub fn config(&self) -> IndicatorConfig {
        self.config.get()
    }

    pub fn status(&self) -> DriverStatus {
        *self.status.borrow()
    }

    /// Wait until the published status satisfies `pred`.
    pub async fn wait_for_status<F>(&self, pred: F) -> Result<DriverStatus>
    where
        F: FnMut(&DriverStatus) -> bool,
    {
        let mut rx = self.status.clone();
        let status = rx
            .wait_for(pred)
            .await
            .map_err(|_| driver_stopped())?;
        Ok(*status)
    }

    async fn send(&self, event: DriverEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| driver_stopped())
    }
}

fn driver_stopped() -> CmdStatusError {
    CmdStatusError::Other(anyhow!("driver has stopped"))
}
