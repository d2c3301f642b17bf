// src/engine/mod.rs

//! Driver loop for cmdstatus.
//!
//! One cycle is: run the script → parse its output → apply it to the
//! display → arm the next timer. This module ties together:
//! - the pure core state machine that decides what happens next ([`core`])
//! - how a finished run is written to the display ([`apply`])
//! - the async shell that owns timers, spawned runs and the display
//!   ([`runtime`])

use std::fmt;

use crate::exec::RunOutcome;

/// Identifier of an armed timer. A fired timer whose id is no longer the
/// pending one is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Options shared by the core and the async shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Stop after the first completed cycle instead of arming a timer
    /// (used for `--once`).
    pub exit_after_first_cycle: bool,
}

/// Events flowing into the driver.
#[derive(Debug, Clone)]
pub enum DriverEvent {
    /// The interval timer elapsed.
    TimerFired { timer: TimerId },
    /// User asked for an immediate update.
    RefreshRequested,
    /// Settings were replaced; behaves like a refresh.
    SettingsChanged,
    /// A spawned run completed.
    CycleFinished(RunOutcome),
    /// Teardown.
    ShutdownRequested,
}

/// What the async shell has to do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    CancelTimer(TimerId),
    StartCycle,
    Apply(RunOutcome),
    ArmTimer(TimerId),
}

pub mod apply;
pub mod core;
pub mod runtime;

pub use apply::apply_outcome;
pub use self::core::{DriverCore, DriverStep, Phase};
pub use runtime::{Driver, DriverHandle, DriverStatus};
