// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

pub mod algorithms;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod runtime;
pub mod scheduling;
pub mod sequence;

pub use algorithms::{AlgorithmId, AlgorithmInfo, SortContext};
pub use collaborators::{
    pentatonic_frequency, AudioSink, Collaborators, Frame, NullRenderer, Palette, Renderer, Rgb,
    SilentAudio, ThemeRegistry, ThemeSource, COMPLETION_CHORD,
};
pub use config::{BenchmarkSettings, VisualizerConfig};
pub use error::{Result, SortlabError};
pub use orchestrator::{
    Benchmark, BenchmarkHandle, BenchmarkReport, LaneReport, LaneStatus, LeaderboardEntry,
    PairwiseReport, PairwiseSession, RankMetric,
};
pub use runtime::{
    RunHandle, RunInstance, RunOutcome, RunState, RunStats, SuspensionStats,
};
pub use scheduling::{Pacing, Speed, BATCH_INTERVAL, PAUSE_POLL_INTERVAL};
pub use sequence::{
    Element, ElementState, InputPattern, PatternGenerator, Preset, Sequence, MAX_VALUE, MIN_VALUE,
};
