// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};

use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};

use super::stats::Stopwatch;
use super::{Parking, RunState, RunStats, SuspensionStats};
use crate::core::algorithms::AlgorithmId;
use crate::core::scheduling::{Speed, PAUSE_POLL_INTERVAL};
use crate::core::sequence::Sequence;

/// State shared between a run instance, its handles and its in-flight body.
pub(crate) struct RunShared {
    state: watch::Sender<RunState>,
    parking: watch::Sender<Parking>,
    algorithm: Mutex<AlgorithmId>,
    speed: AtomicU8,
    step_mode: AtomicBool,
    pending_step: Mutex<Option<oneshot::Sender<()>>>,
    comparisons: AtomicU64,
    swaps: AtomicU64,
    suspensions: AtomicU64,
    host_yields: AtomicU64,
    batch_counter: AtomicU64,
    stopwatch: Mutex<Stopwatch>,
    pub(crate) sequence: Mutex<Sequence>,
    #[cfg(test)]
    pub(crate) fault_at: Mutex<Option<u64>>,
}

impl RunShared {
    pub fn new(algorithm: AlgorithmId, sequence: Sequence, speed: Speed) -> Self {
        Self {
            state: watch::Sender::new(RunState::Idle),
            parking: watch::Sender::new(Parking::Free),
            algorithm: Mutex::new(algorithm),
            speed: AtomicU8::new(speed.value()),
            step_mode: AtomicBool::new(false),
            pending_step: Mutex::new(None),
            comparisons: AtomicU64::new(0),
            swaps: AtomicU64::new(0),
            suspensions: AtomicU64::new(0),
            host_yields: AtomicU64::new(0),
            batch_counter: AtomicU64::new(0),
            stopwatch: Mutex::new(Stopwatch::default()),
            sequence: Mutex::new(sequence),
            #[cfg(test)]
            fault_at: Mutex::new(None),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn state(&self) -> RunState {
        *self.state.borrow()
    }

    pub fn set_state(&self, state: RunState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            tracing::debug!("{}: {:?} -> {:?}", self.algorithm(), previous, state);
        }
    }

    pub fn subscribe_state(&self) -> watch::Receiver<RunState> {
        self.state.subscribe()
    }

    pub fn parking(&self) -> Parking {
        *self.parking.borrow()
    }

    pub fn set_parking(&self, parking: Parking) {
        self.parking.send_replace(parking);
    }

    pub fn subscribe_parking(&self) -> watch::Receiver<Parking> {
        self.parking.subscribe()
    }

    pub fn algorithm(&self) -> AlgorithmId {
        *self.algorithm.lock()
    }

    pub fn set_algorithm(&self, algorithm: AlgorithmId) {
        *self.algorithm.lock() = algorithm;
    }

    /// Request a pause. Only valid while running; the body observes it at
    /// its next checkpoint.
    pub fn pause(&self) -> bool {
        if self.state() != RunState::Running {
            tracing::debug!(
                "{}: pause ignored in state {:?}",
                self.algorithm(),
                self.state()
            );
            return false;
        }
        self.set_state(RunState::Paused);
        self.withdraw_step();
        true
    }

    // =========================================================================
    // Speed and step mode
    // =========================================================================

    pub fn speed(&self) -> Speed {
        Speed::new(self.speed.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_speed(&self, speed: Speed) {
        self.speed.store(speed.value(), Ordering::Relaxed);
    }

    pub fn step_mode(&self) -> bool {
        self.step_mode.load(Ordering::Acquire)
    }

    pub fn set_step_mode(&self, enabled: bool) {
        self.step_mode.store(enabled, Ordering::Release);
    }

    /// Register the single pending step suspension.
    fn register_step(&self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        *self.pending_step.lock() = Some(tx);
        self.set_parking(Parking::AwaitingStep);
        rx
    }

    /// Resolve exactly one pending step suspension, if there is one.
    pub fn advance_step(&self) -> bool {
        let pending = self.pending_step.lock().take();
        match pending {
            Some(tx) => {
                self.set_parking(Parking::Free);
                tx.send(()).is_ok()
            }
            None => false,
        }
    }

    /// Drop the pending step suspension without resolving it.
    pub fn withdraw_step(&self) {
        self.pending_step.lock().take();
    }

    // =========================================================================
    // Blocking phases of a suspension
    // =========================================================================

    /// Block until the next step is released. Returns immediately outside
    /// step mode.
    pub async fn await_step(&self) {
        loop {
            if !self.step_mode() {
                return;
            }
            let released = self.register_step();
            match released.await {
                Ok(()) => return,
                // Withdrawn by pause() or by leaving step mode.
                Err(_) => self.park_if_paused().await,
            }
        }
    }

    /// Block while paused, re-checking every [`PAUSE_POLL_INTERVAL`].
    pub async fn park_if_paused(&self) {
        if self.state() != RunState::Paused {
            return;
        }
        self.stopwatch.lock().stop();
        tracing::debug!("{}: parked at checkpoint", self.algorithm());
        while self.state() == RunState::Paused {
            self.set_parking(Parking::Paused);
            tokio::time::sleep(PAUSE_POLL_INTERVAL).await;
        }
        self.set_parking(Parking::Free);
        self.stopwatch.lock().start();
    }

    // =========================================================================
    // Counters
    // =========================================================================

    pub fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_swap(&self) {
        self.swaps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_suspension(&self) -> u64 {
        self.suspensions.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_host_yield(&self) {
        self.host_yields.fetch_add(1, Ordering::Relaxed);
    }

    /// Advance the batching counter, returning its new value.
    pub fn next_batch_tick(&self) -> u64 {
        self.batch_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            comparisons: self.comparisons.load(Ordering::Relaxed),
            swaps: self.swaps.load(Ordering::Relaxed),
            elapsed: self.stopwatch.lock().elapsed(),
        }
    }

    pub fn suspension_stats(&self) -> SuspensionStats {
        SuspensionStats {
            suspensions: self.suspensions.load(Ordering::Relaxed),
            host_yields: self.host_yields.load(Ordering::Relaxed),
        }
    }

    pub fn clear_counters(&self) {
        for counter in [
            &self.comparisons,
            &self.swaps,
            &self.suspensions,
            &self.host_yields,
            &self.batch_counter,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        self.stopwatch.lock().reset();
    }

    pub fn start_clock(&self) {
        self.stopwatch.lock().start();
    }

    pub fn stop_clock(&self) {
        self.stopwatch.lock().stop();
    }

    /// Stop the clock for good; later resumes do not restart it.
    pub fn freeze_clock(&self) {
        self.stopwatch.lock().freeze();
    }

    pub fn snapshot(&self) -> Sequence {
        self.sequence.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> RunShared {
        RunShared::new(AlgorithmId::Bubble, Sequence::default(), Speed::default())
    }

    #[test]
    fn test_pause_only_from_running() {
        let shared = shared();
        assert!(!shared.pause());
        assert_eq!(shared.state(), RunState::Idle);

        shared.set_state(RunState::Running);
        assert!(shared.pause());
        assert_eq!(shared.state(), RunState::Paused);
        assert!(!shared.pause());
    }

    #[test]
    fn test_advance_step_without_pending_is_noop() {
        let shared = shared();
        assert!(!shared.advance_step());
    }

    #[tokio::test]
    async fn test_one_advance_releases_one_suspension() {
        let shared = std::sync::Arc::new(shared());
        shared.set_step_mode(true);

        let waiter = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.await_step().await })
        };
        while shared.parking() != Parking::AwaitingStep {
            tokio::task::yield_now().await;
        }
        assert!(shared.advance_step());
        assert!(!shared.advance_step());
        waiter.await.unwrap();
        assert_eq!(shared.parking(), Parking::Free);
    }

    #[test]
    fn test_clear_counters() {
        let shared = shared();
        shared.record_comparison();
        shared.record_swap();
        shared.record_suspension();
        shared.clear_counters();
        assert_eq!(shared.stats(), RunStats::default());
        assert_eq!(shared.suspension_stats(), SuspensionStats::default());
    }
}
