// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::algorithms::AlgorithmId;
use crate::core::runtime::serialize_millis;
use crate::core::{Result, SortlabError};

/// What a leaderboard is ranked by. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMetric {
    #[default]
    Time,
    Comparisons,
}

impl RankMetric {
    pub const ALL: [RankMetric; 2] = [RankMetric::Time, RankMetric::Comparisons];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Comparisons => "comparisons",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RankMetric {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                SortlabError::Configuration(format!(
                    "Unknown metric '{}' (expected time or comparisons)",
                    s
                ))
            })
    }
}

/// The recorded outcome of one completed benchmark lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub algorithm: AlgorithmId,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub comparisons: u64,
    pub swaps: u64,
}

/// Sort ascending by `metric`, breaking ties by algorithm declaration order.
pub(crate) fn rank(entries: &mut [LeaderboardEntry], metric: RankMetric) {
    match metric {
        RankMetric::Time => entries.sort_by_key(|e| (e.elapsed, e.algorithm)),
        RankMetric::Comparisons => entries.sort_by_key(|e| (e.comparisons, e.algorithm)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(algorithm: AlgorithmId, millis: u64, comparisons: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            algorithm,
            elapsed: Duration::from_millis(millis),
            comparisons,
            swaps: 0,
        }
    }

    #[test]
    fn test_rank_by_time_breaks_ties_by_declaration_order() {
        let mut entries = vec![
            entry(AlgorithmId::Radix, 5, 10),
            entry(AlgorithmId::Quick, 5, 30),
            entry(AlgorithmId::Bubble, 9, 20),
            entry(AlgorithmId::Merge, 1, 40),
        ];
        rank(&mut entries, RankMetric::Time);
        let order: Vec<_> = entries.iter().map(|e| e.algorithm).collect();
        assert_eq!(
            order,
            vec![
                AlgorithmId::Merge,
                AlgorithmId::Quick,
                AlgorithmId::Radix,
                AlgorithmId::Bubble
            ]
        );
    }

    #[test]
    fn test_rank_by_comparisons() {
        let mut entries = vec![
            entry(AlgorithmId::Heap, 1, 30),
            entry(AlgorithmId::Shell, 2, 10),
            entry(AlgorithmId::Comb, 3, 10),
        ];
        rank(&mut entries, RankMetric::Comparisons);
        let order: Vec<_> = entries.iter().map(|e| e.algorithm).collect();
        assert_eq!(
            order,
            vec![AlgorithmId::Shell, AlgorithmId::Comb, AlgorithmId::Heap]
        );
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("TIME".parse::<RankMetric>().unwrap(), RankMetric::Time);
        assert_eq!(
            "comparisons".parse::<RankMetric>().unwrap(),
            RankMetric::Comparisons
        );
        assert!("swaps".parse::<RankMetric>().is_err());
    }

    #[test]
    fn test_entry_serializes_millis() {
        let json = serde_json::to_value(entry(AlgorithmId::Tim, 12, 3)).unwrap();
        assert_eq!(json["algorithm"], "tim");
        assert_eq!(json["elapsed_ms"], 12);
        assert_eq!(json["comparisons"], 3);
    }
}
