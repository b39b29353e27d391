// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use futures_util::future::join_all;
use serde::Serialize;

use super::leaderboard::rank;
use super::{LaneReport, LaneStatus, LeaderboardEntry, RankMetric};
use crate::core::algorithms::AlgorithmId;
use crate::core::collaborators::Collaborators;
use crate::core::config::BenchmarkSettings;
use crate::core::runtime::{RunHandle, RunInstance, RunState};
use crate::core::scheduling::Speed;
use crate::core::sequence::{InputPattern, PatternGenerator, Sequence};
use crate::core::{Result, SortlabError};

/// One lane per algorithm, all started together at maximum speed over deep
/// copies of one shared input.
pub struct Benchmark {
    lanes: Vec<RunInstance>,
    input: Sequence,
    pattern: InputPattern,
    generator: PatternGenerator,
}

impl Benchmark {
    pub fn new(
        algorithms: &[AlgorithmId],
        size: usize,
        pattern: InputPattern,
        mut generator: PatternGenerator,
    ) -> Result<Self> {
        if algorithms.is_empty() {
            return Err(SortlabError::Configuration(
                "a benchmark needs at least one algorithm".into(),
            ));
        }
        let input = generator.pattern(pattern, size)?;
        let lanes = algorithms
            .iter()
            .map(|&algorithm| RunInstance::new(algorithm, input.clone()).with_speed(Speed::MAX))
            .collect();
        Ok(Self {
            lanes,
            input,
            pattern,
            generator,
        })
    }

    pub fn from_settings(settings: &BenchmarkSettings, seed: Option<u64>) -> Result<Self> {
        Self::new(
            &settings.algorithms,
            settings.array_size,
            settings.pattern,
            PatternGenerator::from_seed(seed),
        )
    }

    /// Give each lane its own collaborators.
    pub fn with_collaborators(mut self, make: impl Fn(AlgorithmId) -> Collaborators) -> Self {
        self.lanes = self
            .lanes
            .into_iter()
            .map(|lane| {
                let collaborators = make(lane.algorithm());
                lane.with_collaborators(collaborators)
            })
            .collect();
        self
    }

    pub fn input(&self) -> &Sequence {
        &self.input
    }

    pub fn pattern(&self) -> InputPattern {
        self.pattern
    }

    pub fn lanes(&self) -> &[RunInstance] {
        &self.lanes
    }

    /// Handle for aborting a run from another task.
    pub fn handle(&self) -> BenchmarkHandle {
        BenchmarkHandle {
            lanes: self.lanes.iter().map(RunInstance::handle).collect(),
        }
    }

    /// Generate a new shared input of the same size.
    pub fn generate(&mut self, pattern: InputPattern) -> Result<()> {
        self.input = self.generator.pattern(pattern, self.input.len())?;
        self.pattern = pattern;
        Ok(())
    }

    /// Use caller-supplied data as the shared input.
    pub fn load_input(&mut self, input: Sequence) {
        self.input = input;
    }

    /// Copy the shared input into every lane and drive them all until each
    /// completes, fails or is aborted. A failing lane does not stop the
    /// others.
    pub async fn run(&mut self) -> BenchmarkReport {
        tracing::info!(
            "Benchmark: {} algorithms on {} {} elements",
            self.lanes.len(),
            self.input.len(),
            self.pattern.key()
        );
        for lane in &mut self.lanes {
            lane.load_sequence(self.input.clone());
        }

        let outcomes = join_all(self.lanes.iter_mut().map(|lane| lane.play())).await;

        let lanes: Vec<LaneReport> = self
            .lanes
            .iter()
            .zip(outcomes)
            .map(|(lane, outcome)| LaneReport::capture(lane, Some(outcome)))
            .collect();
        let aborted = lanes.iter().any(|l| l.status == LaneStatus::Paused);

        let completed = lanes.iter().filter(|l| l.status.is_completed()).count();
        let failed = lanes.iter().filter(|l| l.status.is_failed()).count();
        if aborted {
            tracing::info!("Benchmark aborted: {} of {} completed", completed, lanes.len());
        } else {
            tracing::info!(
                "Benchmark finished: {} completed, {} failed",
                completed,
                failed
            );
        }

        BenchmarkReport {
            pattern: self.pattern,
            size: self.input.len(),
            aborted,
            lanes,
        }
    }
}

impl std::fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmark")
            .field("lanes", &self.lanes.len())
            .field("pattern", &self.pattern)
            .field("size", &self.input.len())
            .finish()
    }
}

/// Aborts a running benchmark by pausing every lane.
#[derive(Debug, Clone)]
pub struct BenchmarkHandle {
    lanes: Vec<RunHandle>,
}

impl BenchmarkHandle {
    /// Returns how many lanes were still running.
    pub fn abort(&self) -> usize {
        let paused = self.lanes.iter().filter(|lane| lane.pause()).count();
        tracing::debug!("Benchmark abort paused {} lanes", paused);
        paused
    }

    pub fn is_running(&self) -> bool {
        self.lanes
            .iter()
            .any(|lane| lane.state() == RunState::Running)
    }
}

/// Raw per-lane results of the last run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub pattern: InputPattern,
    pub size: usize,
    pub aborted: bool,
    /// In lane order.
    pub lanes: Vec<LaneReport>,
}

impl BenchmarkReport {
    /// Completed lanes ranked ascending by `metric`. Re-ranking never re-runs.
    pub fn leaderboard(&self, metric: RankMetric) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .lanes
            .iter()
            .filter(|lane| lane.status.is_completed())
            .map(|lane| LeaderboardEntry {
                algorithm: lane.algorithm,
                elapsed: lane.stats.elapsed,
                comparisons: lane.stats.comparisons,
                swaps: lane.stats.swaps,
            })
            .collect();
        rank(&mut entries, metric);
        entries
    }

    pub fn lane(&self, algorithm: AlgorithmId) -> Option<&LaneReport> {
        self.lanes.iter().find(|lane| lane.algorithm == algorithm)
    }
}
