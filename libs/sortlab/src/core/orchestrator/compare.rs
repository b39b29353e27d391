// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::Serialize;

use super::LaneReport;
use crate::core::algorithms::AlgorithmId;
use crate::core::collaborators::Collaborators;
use crate::core::runtime::{RunHandle, RunInstance, RunOutcome, RunState};
use crate::core::scheduling::Speed;
use crate::core::sequence::{PatternGenerator, Preset, Sequence};
use crate::core::{Result, SortlabError};

/// Both lanes after a [`PairwiseSession::play`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseReport {
    pub left: LaneReport,
    pub right: LaneReport,
}

/// Two algorithms racing over deep copies of one input at a shared speed.
///
/// Aggregate controls fan out to both lanes. Input changes apply only when
/// neither lane is running, so the lanes never diverge in what they sort.
pub struct PairwiseSession {
    left: RunInstance,
    right: RunInstance,
    input: Sequence,
    generator: PatternGenerator,
}

impl PairwiseSession {
    pub fn new(left: AlgorithmId, right: AlgorithmId, input: Sequence) -> Self {
        Self {
            left: RunInstance::new(left, input.clone()),
            right: RunInstance::new(right, input.clone()),
            input,
            generator: PatternGenerator::new(),
        }
    }

    /// Lanes get their own collaborators so their output never mixes.
    pub fn with_collaborators(mut self, left: Collaborators, right: Collaborators) -> Self {
        self.left = self.left.with_collaborators(left);
        self.right = self.right.with_collaborators(right);
        self
    }

    pub fn with_generator(mut self, generator: PatternGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.left = self.left.with_speed(speed);
        self.right = self.right.with_speed(speed);
        self
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn left(&self) -> &RunInstance {
        &self.left
    }

    pub fn right(&self) -> &RunInstance {
        &self.right
    }

    pub fn input(&self) -> &Sequence {
        &self.input
    }

    /// Handles for pausing the lanes from another task.
    pub fn handles(&self) -> [RunHandle; 2] {
        [self.left.handle(), self.right.handle()]
    }

    // =========================================================================
    // Aggregate controls
    // =========================================================================

    /// Start both lanes together on fresh copies of the input and drive
    /// them until both finish or park. If either lane is paused, only the
    /// paused lanes are resumed instead.
    pub async fn play(&mut self) -> PairwiseReport {
        let resuming = self.left.state() == RunState::Paused
            || self.right.state() == RunState::Paused;

        if !resuming {
            tracing::info!(
                "Comparing {} and {} on {} elements",
                self.left.algorithm().display_name(),
                self.right.algorithm().display_name(),
                self.input.len()
            );
            self.left.load_sequence(self.input.clone());
            self.right.load_sequence(self.input.clone());
        }

        let (left, right) = tokio::join!(
            drive_lane(&mut self.left, resuming),
            drive_lane(&mut self.right, resuming)
        );

        PairwiseReport {
            left: LaneReport::capture(&self.left, left),
            right: LaneReport::capture(&self.right, right),
        }
    }

    /// Pause both lanes. True if either was running.
    pub fn pause(&self) -> bool {
        let left = self.left.pause();
        let right = self.right.pause();
        left || right
    }

    pub fn shuffle(&mut self) -> Result<bool> {
        let len = self.input.len();
        self.replace_input(
            |generator| match len {
                0 => Ok(Sequence::default()),
                _ => generator.shuffled(len),
            },
            "shuffle",
        )
    }

    pub fn set_preset(&mut self, preset: Preset) -> Result<bool> {
        let len = self.input.len();
        self.replace_input(
            |generator| match len {
                0 => Ok(Sequence::default()),
                _ => generator.preset(preset, len),
            },
            "set_preset",
        )
    }

    /// Change the shared input length, keeping leading values.
    pub fn resize(&mut self, len: usize) -> Result<bool> {
        if len == 0 {
            return Err(SortlabError::Configuration(
                "sequence length must be at least 1".into(),
            ));
        }
        let mut input = self.input.clone();
        self.replace_input(
            |generator| {
                input.resize(len, generator)?;
                Ok(input)
            },
            "resize",
        )
    }

    /// Replace the shared input with caller-supplied data.
    pub fn load_input(&mut self, input: Sequence) -> bool {
        self.replace_input(|_| Ok(input), "load_input")
            .unwrap_or(false)
    }

    pub fn set_speed(&self, speed: u8) -> Result<()> {
        let speed = Speed::new(speed)?;
        self.left.set_speed(speed.value())?;
        self.right.set_speed(speed.value())
    }

    /// Reassign both lanes' algorithms. Ignored while either lane runs.
    pub fn set_algorithms(&mut self, left: AlgorithmId, right: AlgorithmId) -> bool {
        if !self.idle_enough("set_algorithms") {
            return false;
        }
        self.left.set_algorithm(left) && self.right.set_algorithm(right)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn idle_enough(&self, request: &str) -> bool {
        let running = [&self.left, &self.right]
            .iter()
            .any(|lane| lane.state() == RunState::Running);
        if running {
            tracing::debug!("pairwise {} ignored while a lane is running", request);
        }
        !running
    }

    fn replace_input(
        &mut self,
        generate: impl FnOnce(&mut PatternGenerator) -> Result<Sequence>,
        request: &str,
    ) -> Result<bool> {
        if !self.idle_enough(request) {
            return Ok(false);
        }
        let input = generate(&mut self.generator)?;
        self.left.load_sequence(input.clone());
        self.right.load_sequence(input.clone());
        self.input = input;
        Ok(true)
    }
}

async fn drive_lane(lane: &mut RunInstance, resuming: bool) -> Option<Result<RunOutcome>> {
    if resuming && lane.state() != RunState::Paused {
        return None;
    }
    Some(lane.play().await)
}

impl std::fmt::Debug for PairwiseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairwiseSession")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("len", &self.input.len())
            .finish()
    }
}
