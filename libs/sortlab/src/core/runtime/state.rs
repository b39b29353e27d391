// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Run state machine types
//!
//! - `RunState` - lifecycle of one run instance
//! - `Parking` - where the algorithm body is currently blocked
//! - `RunOutcome` - why a driving call returned

use serde::{Deserialize, Serialize};

/// Lifecycle of one run instance.
///
/// # State Transitions
///
/// ```text
/// ┌──────┐  play() / step()  ┌─────────┐  pause()  ┌────────┐
/// │ Idle │──────────────────►│ Running │──────────►│ Paused │
/// └──────┘                   └────┬────┘◄──────────┴───┬────┘
///    ▲                            │      play()        │
///    │                            │ body exhausted     │ reset() / shuffle()
///    │                            ▼                    │ set_preset() / resize()
///    │                     ┌───────────┐               │
///    │                     │ Completed │               │
///    │                     └─────┬─────┘               │
///    └───────────────────────────┴─────────────────────┘
///
/// A body error moves Running to Failed, which behaves like Completed.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Fresh input, counters cleared, no body in flight
    #[default]
    Idle,

    /// A body is in flight and allowed to make progress
    Running,

    /// A body is in flight but parked at a checkpoint
    Paused,

    /// The body ran to exhaustion; ready to re-run
    Completed,

    /// The body returned an error
    Failed,
}

impl RunState {
    /// A body exists and can continue.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// `play()` starts a fresh body from this state.
    pub fn launches_fresh(&self) -> bool {
        matches!(self, Self::Idle | Self::Completed | Self::Failed)
    }

    /// Input may be replaced (reset, shuffle, preset, resize, algorithm).
    pub fn accepts_new_input(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Where the algorithm body is blocked, as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Parking {
    #[default]
    Free,
    /// Parked at a checkpoint, polling the run state.
    Paused,
    /// Blocked on a step suspension.
    AwaitingStep,
}

/// Why a driving call (`play`, `step`) returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The body ran to exhaustion and the completion sweep finished.
    Completed,
    /// The body observed a pause and parked; `play()` resumes it.
    Paused,
    /// Step mode: the body is blocked until the next step.
    AwaitingStep,
    /// The request conflicted with the current state and was ignored.
    Ignored,
}
