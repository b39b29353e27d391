// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::{Parking, RunHandle, RunOutcome, RunShared, RunState, RunStats, SuspensionStats};
use crate::core::algorithms::{AlgorithmId, SortContext};
use crate::core::collaborators::{Collaborators, Frame};
use crate::core::config::VisualizerConfig;
use crate::core::scheduling::Speed;
use crate::core::sequence::{PatternGenerator, Preset, Sequence};
use crate::core::{Result, SortlabError};

type BoxedBody = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// One algorithm running over one owned sequence.
///
/// The algorithm body is an async task owned by the instance. `play()` and
/// `step()` drive it until it completes, parks on a pause, or blocks on a
/// step; a parked body is resumed by the next `play()` and discarded when
/// the input is replaced.
pub struct RunInstance {
    shared: Arc<RunShared>,
    algorithm: AlgorithmId,
    collaborators: Collaborators,
    generator: PatternGenerator,
    body: Option<BoxedBody>,
}

impl RunInstance {
    pub fn new(algorithm: AlgorithmId, sequence: Sequence) -> Self {
        Self {
            shared: Arc::new(RunShared::new(algorithm, sequence, Speed::default())),
            algorithm,
            collaborators: Collaborators::default(),
            generator: PatternGenerator::new(),
            body: None,
        }
    }

    /// Instance over a freshly shuffled input, as configured.
    pub fn from_config(config: &VisualizerConfig, collaborators: Collaborators) -> Result<Self> {
        config.validate()?;
        let mut generator = PatternGenerator::from_seed(config.seed);
        let sequence = generator.shuffled(config.array_size)?;
        Ok(Self::new(config.algorithm, sequence)
            .with_speed(config.speed)
            .with_generator(generator)
            .with_collaborators(collaborators))
    }

    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn with_speed(self, speed: Speed) -> Self {
        self.shared.set_speed(speed);
        self
    }

    pub fn with_generator(mut self, generator: PatternGenerator) -> Self {
        self.generator = generator;
        self
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn handle(&self) -> RunHandle {
        RunHandle::new(self.shared.clone())
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn state(&self) -> RunState {
        self.shared.state()
    }

    pub fn stats(&self) -> RunStats {
        self.shared.stats()
    }

    pub fn suspension_stats(&self) -> SuspensionStats {
        self.shared.suspension_stats()
    }

    pub fn speed(&self) -> Speed {
        self.shared.speed()
    }

    pub fn is_step_mode(&self) -> bool {
        self.shared.step_mode()
    }

    /// Deep copy of the current sequence.
    pub fn snapshot(&self) -> Sequence {
        self.shared.snapshot()
    }

    pub fn len(&self) -> usize {
        self.shared.sequence.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Control surface
    // =========================================================================

    /// Run continuously: launch from Idle/Completed/Failed, resume from
    /// Paused, or leave step mode while running.
    pub async fn play(&mut self) -> Result<RunOutcome> {
        let state = self.state();
        if self.body.is_none() || state.launches_fresh() {
            self.launch();
        } else if state == RunState::Paused {
            self.resume();
        }
        self.leave_step_mode();
        self.drive().await
    }

    /// Advance one primitive operation.
    ///
    /// From Idle (or a finished run) this launches in step mode and stops at
    /// the first suspension. While stepping, it releases exactly one pending
    /// suspension and drives until the next one. While running continuously
    /// it is ignored.
    pub async fn step(&mut self) -> Result<RunOutcome> {
        let state = self.state();
        if self.body.is_none() || state.launches_fresh() {
            self.shared.set_step_mode(true);
            self.launch();
        } else if state == RunState::Paused {
            self.shared.set_step_mode(true);
            self.resume();
        } else if self.shared.step_mode() {
            self.shared.advance_step();
        } else {
            tracing::debug!("{}: step ignored while running continuously", self.algorithm);
            return Ok(RunOutcome::Ignored);
        }
        self.drive().await
    }

    /// Request a pause; see [`RunHandle::pause`].
    pub fn pause(&self) -> bool {
        self.shared.pause()
    }

    /// Discard the current sequence and counters with a freshly shuffled
    /// input of the same length.
    pub fn reset(&mut self) -> Result<bool> {
        self.regenerate("reset")
    }

    /// Same as [`reset`](Self::reset); offered separately on the control surface.
    pub fn shuffle(&mut self) -> Result<bool> {
        self.regenerate("shuffle")
    }

    pub fn set_preset(&mut self, preset: Preset) -> Result<bool> {
        if !self.accepts_new_input("set_preset") {
            return Ok(false);
        }
        let len = self.len();
        let sequence = if len == 0 {
            Sequence::default()
        } else {
            self.generator.preset(preset, len)?
        };
        self.replace_input(sequence);
        Ok(true)
    }

    /// Change the length, keeping leading values. Zero is rejected.
    pub fn resize(&mut self, len: usize) -> Result<bool> {
        if len == 0 {
            return Err(SortlabError::Configuration(
                "sequence length must be at least 1".into(),
            ));
        }
        if !self.accepts_new_input("resize") {
            return Ok(false);
        }
        let mut sequence = self.snapshot();
        sequence.resize(len, &mut self.generator)?;
        self.replace_input(sequence);
        Ok(true)
    }

    /// Replace the input with caller-supplied data (already validated).
    pub fn load_sequence(&mut self, sequence: Sequence) -> bool {
        if !self.accepts_new_input("load_sequence") {
            return false;
        }
        self.replace_input(sequence);
        true
    }

    pub fn set_speed(&self, speed: u8) -> Result<()> {
        self.shared.set_speed(Speed::new(speed)?);
        Ok(())
    }

    /// Select another algorithm. Ignored while running; discards a paused body.
    pub fn set_algorithm(&mut self, algorithm: AlgorithmId) -> bool {
        if !self.accepts_new_input("set_algorithm") {
            return false;
        }
        self.algorithm = algorithm;
        self.shared.set_algorithm(algorithm);
        let sequence = self.snapshot();
        self.replace_input(sequence);
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn accepts_new_input(&self, request: &str) -> bool {
        let state = self.state();
        if !state.accepts_new_input() {
            tracing::debug!("{}: {} ignored in state {:?}", self.algorithm, request, state);
            return false;
        }
        true
    }

    fn regenerate(&mut self, request: &str) -> Result<bool> {
        if !self.accepts_new_input(request) {
            return Ok(false);
        }
        let len = self.len();
        let sequence = if len == 0 {
            Sequence::default()
        } else {
            self.generator.shuffled(len)?
        };
        self.replace_input(sequence);
        Ok(true)
    }

    /// Drop any in-flight body, install `sequence` and return to Idle.
    fn replace_input(&mut self, mut sequence: Sequence) {
        self.body = None;
        self.leave_step_mode();
        sequence.reset_states();
        *self.shared.sequence.lock() = sequence;
        self.shared.clear_counters();
        self.shared.set_parking(Parking::Free);
        self.shared.set_state(RunState::Idle);
        self.redraw();
    }

    fn redraw(&self) {
        let palette = self.collaborators.theme.current_colors();
        let elements = self.shared.sequence.lock().elements().to_vec();
        self.collaborators.renderer.draw(&Frame {
            elements: &elements,
            comparing: &[],
            swapping: &[],
            palette: &palette,
        });
    }

    fn leave_step_mode(&self) {
        self.shared.set_step_mode(false);
        self.shared.withdraw_step();
        if self.shared.parking() == Parking::AwaitingStep {
            self.shared.set_parking(Parking::Free);
        }
    }

    fn launch(&mut self) {
        self.shared.sequence.lock().reset_states();
        self.shared.clear_counters();
        self.shared.set_parking(Parking::Free);

        let ctx = SortContext::new(
            self.shared.clone(),
            self.algorithm,
            &self.collaborators,
        );
        let algorithm = self.algorithm;
        tracing::info!("Launching {} on {} elements", algorithm.display_name(), ctx.len());

        self.body = Some(Box::pin(async move {
            algorithm.run(&ctx).await?;
            ctx.finish_timing();
            ctx.completion_sweep().await;
            Ok(())
        }));
        self.shared.set_state(RunState::Running);
        self.shared.start_clock();
    }

    fn resume(&mut self) {
        tracing::debug!("{}: resuming", self.algorithm);
        self.shared.set_state(RunState::Running);
        self.shared.set_parking(Parking::Free);
    }

    /// Poll the body until it finishes or parks.
    async fn drive(&mut self) -> Result<RunOutcome> {
        let Some(body) = self.body.as_mut() else {
            return Ok(RunOutcome::Ignored);
        };
        let mut parking = self.shared.subscribe_parking();

        let finished = tokio::select! {
            biased;
            result = body => Some(result),
            _ = parking.wait_for(|p| *p != Parking::Free) => None,
        };

        match finished {
            None => Ok(match self.shared.parking() {
                Parking::AwaitingStep => RunOutcome::AwaitingStep,
                Parking::Paused | Parking::Free => RunOutcome::Paused,
            }),
            Some(Ok(())) => {
                self.body = None;
                self.shared.set_state(RunState::Completed);
                let stats = self.stats();
                tracing::info!(
                    "{} completed: {} comparisons, {} swaps, {}ms",
                    self.algorithm.display_name(),
                    stats.comparisons,
                    stats.swaps,
                    stats.elapsed_ms()
                );
                Ok(RunOutcome::Completed)
            }
            Some(Err(e)) => {
                self.body = None;
                self.shared.stop_clock();
                self.shared.set_state(RunState::Failed);
                let fault = match e {
                    fault @ SortlabError::AlgorithmFault { .. } => fault,
                    other => SortlabError::AlgorithmFault {
                        algorithm: self.algorithm,
                        message: other.to_string(),
                    },
                };
                tracing::error!("{}", fault);
                Err(fault)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn inject_fault_after(&self, suspensions: u64) {
        *self.shared.fault_at.lock() = Some(suspensions);
    }
}

impl std::fmt::Debug for RunInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunInstance")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state())
            .field("in_flight", &self.body.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(values: &[f64]) -> RunInstance {
        RunInstance::new(AlgorithmId::Bubble, Sequence::from_values(values).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_completes_and_is_rerunnable() {
        let mut run = instance(&[5.0, 2.0, 8.0, 1.0, 9.0]);
        assert_eq!(run.play().await.unwrap(), RunOutcome::Completed);
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.snapshot().values(), vec![1.0, 2.0, 5.0, 8.0, 9.0]);
        assert!(run.snapshot().elements().iter().all(|e| e.is_sorted()));

        // Re-running a finished instance starts over with cleared counters.
        assert_eq!(run.play().await.unwrap(), RunOutcome::Completed);
        assert_eq!(run.stats().comparisons, 10);
        assert_eq!(run.stats().swaps, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_ignored_while_running_continuously() {
        let mut run = instance(&[3.0, 2.0, 1.0]);
        run.set_speed(10).unwrap();
        assert_eq!(run.step().await.unwrap(), RunOutcome::AwaitingStep);

        // Running without step mode: a step request has nothing to release.
        run.shared.set_step_mode(false);
        assert_eq!(run.step().await.unwrap(), RunOutcome::Ignored);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_changes_ignored_while_running() {
        let mut run = instance(&[3.0, 2.0, 1.0]);
        assert_eq!(run.step().await.unwrap(), RunOutcome::AwaitingStep);
        assert_eq!(run.state(), RunState::Running);

        assert!(!run.shuffle().unwrap());
        assert!(!run.set_preset(Preset::Valley).unwrap());
        assert!(!run.resize(10).unwrap());
        assert!(!run.set_algorithm(AlgorithmId::Quick));
        assert!(run.resize(0).is_err());
        assert_eq!(run.len(), 3);
        assert_eq!(run.algorithm(), AlgorithmId::Bubble);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_from_paused_returns_to_idle() {
        let mut run = instance(&[3.0, 2.0, 1.0, 0.5]);
        assert_eq!(run.step().await.unwrap(), RunOutcome::AwaitingStep);
        assert!(run.pause());
        assert_eq!(run.state(), RunState::Paused);

        assert!(run.reset().unwrap());
        assert_eq!(run.state(), RunState::Idle);
        assert_eq!(run.stats(), RunStats::default());
        assert_eq!(run.len(), 4);
        assert!(!run.is_step_mode());
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_fault_marks_failed() {
        let mut run = instance(&[3.0, 2.0, 1.0, 0.5]);
        run.inject_fault_after(2);
        let err = run.play().await.unwrap_err();
        assert!(matches!(
            err,
            SortlabError::AlgorithmFault {
                algorithm: AlgorithmId::Bubble,
                ..
            }
        ));
        assert_eq!(run.state(), RunState::Failed);
    }
}
