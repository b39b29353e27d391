// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Drivers for several run instances at once.
//!
//! Lanes never share a sequence: each receives its own deep copy of the
//! input and is driven on the caller's task, interleaved at suspension
//! points.

mod benchmark;
mod compare;
mod lane;
mod leaderboard;

pub use benchmark::{Benchmark, BenchmarkHandle, BenchmarkReport};
pub use compare::{PairwiseReport, PairwiseSession};
pub use lane::{LaneReport, LaneStatus};
pub use leaderboard::{LeaderboardEntry, RankMetric};
