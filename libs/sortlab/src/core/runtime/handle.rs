// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use tokio::sync::watch;

use super::{RunShared, RunState, RunStats, SuspensionStats};
use crate::core::algorithms::AlgorithmId;
use crate::core::scheduling::Speed;
use crate::core::sequence::Sequence;
use crate::core::Result;

/// Cloneable control and observation handle for a run instance.
///
/// Usable from other tasks (a signal handler, a UI loop) while the instance
/// itself is being driven.
#[derive(Clone)]
pub struct RunHandle {
    shared: Arc<RunShared>,
}

impl RunHandle {
    pub(crate) fn new(shared: Arc<RunShared>) -> Self {
        Self { shared }
    }

    /// Request a pause. Returns `false` (and does nothing) unless running.
    pub fn pause(&self) -> bool {
        self.shared.pause()
    }

    /// Takes effect at the next suspension.
    pub fn set_speed(&self, speed: u8) -> Result<()> {
        self.shared.set_speed(Speed::new(speed)?);
        Ok(())
    }

    pub fn speed(&self) -> Speed {
        self.shared.speed()
    }

    pub fn state(&self) -> RunState {
        self.shared.state()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RunState> {
        self.shared.subscribe_state()
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.shared.algorithm()
    }

    pub fn is_step_mode(&self) -> bool {
        self.shared.step_mode()
    }

    pub fn stats(&self) -> RunStats {
        self.shared.stats()
    }

    pub fn suspension_stats(&self) -> SuspensionStats {
        self.shared.suspension_stats()
    }

    /// Deep copy of the current sequence.
    pub fn snapshot(&self) -> Sequence {
        self.shared.snapshot()
    }
}

impl std::fmt::Debug for RunHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunHandle")
            .field("algorithm", &self.algorithm())
            .field("state", &self.state())
            .finish()
    }
}
