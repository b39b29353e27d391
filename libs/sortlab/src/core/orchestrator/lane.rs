// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::Serialize;

use crate::core::algorithms::AlgorithmId;
use crate::core::runtime::{RunInstance, RunOutcome, RunState, RunStats};
use crate::core::Result;

/// Where an orchestrated lane ended up after the last drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LaneStatus {
    /// Not started.
    Waiting,
    Completed,
    /// Stopped before finishing, by a pause or an abort.
    Paused,
    Failed { message: String },
}

impl LaneStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One lane's algorithm, status and counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneReport {
    pub algorithm: AlgorithmId,
    #[serde(flatten)]
    pub status: LaneStatus,
    pub stats: RunStats,
}

impl LaneReport {
    /// Capture a lane after it was driven (`Some`) or left alone (`None`).
    pub(crate) fn capture(instance: &RunInstance, outcome: Option<Result<RunOutcome>>) -> Self {
        let status = match (instance.state(), outcome) {
            (_, Some(Err(e))) => LaneStatus::Failed {
                message: e.to_string(),
            },
            (RunState::Failed, _) => LaneStatus::Failed {
                message: "failed on a previous run".to_string(),
            },
            (RunState::Completed, _) => LaneStatus::Completed,
            (state, _) if state.is_active() => LaneStatus::Paused,
            _ => LaneStatus::Waiting,
        };
        Self {
            algorithm: instance.algorithm(),
            status,
            stats: instance.stats(),
        }
    }
}
