// src/engine/core.rs

//! Pure core state machine of the driver.
//!
//! `Idle → Running → Idle`, with at most one pending timer at any time.
//! It consumes [`DriverEvent`]s and returns [`DriverCommand`]s for the async
//! shell; there are no channels, no Tokio types and no IO in here, so every
//! scheduling rule can be unit tested directly.

use tracing::debug;

use super::{DriverCommand, DriverEvent, DriverOptions, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Commands produced by one step, and whether the loop should continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverStep {
    pub commands: Vec<DriverCommand>,
    pub keep_running: bool,
}

impl DriverStep {
    fn continue_with(commands: Vec<DriverCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }
}

#[derive(Debug)]
pub struct DriverCore {
    phase: Phase,
    pending_timer: Option<TimerId>,
    next_timer: u64,
    /// A refresh arrived while a cycle was running.
    refresh_queued: bool,
    cycles_completed: u64,
    options: DriverOptions,
}

impl DriverCore {
    pub fn new(options: DriverOptions) -> Self {
        Self {
            phase: Phase::Idle,
            pending_timer: None,
            next_timer: 0,
            refresh_queued: false,
            cycles_completed: 0,
            options,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// The very first cycle, run as soon as the driver starts.
    pub fn start(&mut self) -> DriverStep {
        let mut commands = Vec::new();
        self.begin_cycle(&mut commands);
        DriverStep::continue_with(commands)
    }

    /// Handle a single event and return the resulting commands.
    pub fn step(&mut self, event: DriverEvent) -> DriverStep {
        match event {
            DriverEvent::TimerFired { timer } => self.on_timer(timer),
            DriverEvent::RefreshRequested | DriverEvent::SettingsChanged => self.on_refresh(),
            DriverEvent::CycleFinished(outcome) => self.on_cycle_finished(outcome),
            DriverEvent::ShutdownRequested => {
                let mut commands = Vec::new();
                if let Some(timer) = self.pending_timer.take() {
                    commands.push(DriverCommand::CancelTimer(timer));
                }
                DriverStep {
                    commands,
                    keep_running: false,
                }
            }
        }
    }

    fn on_timer(&mut self, timer: TimerId) -> DriverStep {
        if self.phase != Phase::Idle || self.pending_timer != Some(timer) {
            debug!(%timer, pending = ?self.pending_timer, "ignoring stale timer");
            return DriverStep::continue_with(Vec::new());
        }

        let mut commands = Vec::new();
        self.begin_cycle(&mut commands);
        DriverStep::continue_with(commands)
    }

    fn on_refresh(&mut self) -> DriverStep {
        if self.phase == Phase::Running {
            debug!("cycle already running; queueing refresh");
            self.refresh_queued = true;
            return DriverStep::continue_with(Vec::new());
        }

        let mut commands = Vec::new();
        self.begin_cycle(&mut commands);
        DriverStep::continue_with(commands)
    }

    fn on_cycle_finished(&mut self, outcome: crate::exec::RunOutcome) -> DriverStep {
        if self.phase != Phase::Running {
            debug!("cycle result arrived while idle; ignoring");
            return DriverStep::continue_with(Vec::new());
        }

        self.phase = Phase::Idle;
        self.cycles_completed += 1;

        let mut commands = vec![DriverCommand::Apply(outcome)];

        if self.options.exit_after_first_cycle {
            return DriverStep {
                commands,
                keep_running: false,
            };
        }

        if std::mem::take(&mut self.refresh_queued) {
            self.begin_cycle(&mut commands);
        } else {
            let timer = TimerId(self.next_timer);
            self.next_timer += 1;
            self.pending_timer = Some(timer);
            commands.push(DriverCommand::ArmTimer(timer));
        }

        DriverStep::continue_with(commands)
    }

    /// Idle → Running. Clears the pending timer first so no timer-driven
    /// cycle can follow this one before it has finished.
    fn begin_cycle(&mut self, commands: &mut Vec<DriverCommand>) {
        if let Some(timer) = self.pending_timer.take() {
            commands.push(DriverCommand::CancelTimer(timer));
        }
        self.phase = Phase::Running;
        commands.push(DriverCommand::StartCycle);
    }
}
