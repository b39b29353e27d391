// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Input generation: shuffled ramps, shape presets and benchmark patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Sequence, MAX_VALUE};
use crate::core::{Result, SortlabError};

/// Probability that a nearly-sorted slot is replaced by a random value.
const NEARLY_SORTED_NOISE: f64 = 0.1;

/// Shape presets offered by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Reverse,
    Valley,
    Mountain,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Reverse, Preset::Valley, Preset::Mountain];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::Valley => "valley",
            Self::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preset {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortlabError::UnknownPattern(s.to_string()))
    }
}

/// Shared input patterns used by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputPattern {
    #[default]
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "sorted")]
    Sorted,
    #[serde(rename = "reverse")]
    Reversed,
    #[serde(rename = "nearly")]
    NearlySorted,
}

impl InputPattern {
    pub const ALL: [InputPattern; 4] = [
        InputPattern::Random,
        InputPattern::Sorted,
        InputPattern::Reversed,
        InputPattern::NearlySorted,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reverse",
            Self::NearlySorted => "nearly",
        }
    }
}

impl fmt::Display for InputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputPattern {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortlabError::UnknownPattern(s.to_string()))
    }
}

/// Source of every generated input.
///
/// The only randomness in the system lives here; algorithm bodies never draw
/// from it.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    rng: fastrand::Rng,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    /// Uniform value in `[0, 100)`.
    pub fn uniform_value(&mut self) -> f64 {
        self.rng.f64() * MAX_VALUE
    }

    /// Evenly spaced ramp `(i+1)/n * 100`, Fisher-Yates shuffled.
    pub fn shuffled(&mut self, len: usize) -> Result<Sequence> {
        let mut values = ramp(checked_len(len)?);
        self.shuffle_values(&mut values);
        Sequence::from_values(&values)
    }

    pub fn preset(&mut self, preset: Preset, len: usize) -> Result<Sequence> {
        let n = checked_len(len)? as f64;
        let values: Vec<f64> = (0..len)
            .map(|i| {
                let i = i as f64;
                let mid = n / 2.0;
                match preset {
                    Preset::Reverse => (n - i) / n * MAX_VALUE,
                    Preset::Valley => (i - mid).abs() / mid * MAX_VALUE,
                    Preset::Mountain => (1.0 - (i - mid).abs() / mid) * MAX_VALUE,
                }
            })
            .map(|v| v.clamp(0.0, MAX_VALUE))
            .collect();
        Sequence::from_values(&values)
    }

    pub fn pattern(&mut self, pattern: InputPattern, len: usize) -> Result<Sequence> {
        let n = checked_len(len)? as f64;
        let values: Vec<f64> = match pattern {
            InputPattern::Random => return self.shuffled(len),
            InputPattern::Sorted => ramp(len),
            InputPattern::Reversed => (0..len).map(|i| (n - i as f64) / n * MAX_VALUE).collect(),
            InputPattern::NearlySorted => ramp(len)
                .into_iter()
                .map(|v| {
                    if self.rng.f64() < NEARLY_SORTED_NOISE {
                        self.uniform_value()
                    } else {
                        v
                    }
                })
                .collect(),
        };
        Sequence::from_values(&values)
    }

    fn shuffle_values(&mut self, values: &mut [f64]) {
        for i in (1..values.len()).rev() {
            let j = self.rng.usize(0..=i);
            values.swap(i, j);
        }
    }
}

fn checked_len(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(SortlabError::Configuration(
            "sequence length must be at least 1".into(),
        ));
    }
    Ok(len)
}

fn ramp(len: usize) -> Vec<f64> {
    let n = len as f64;
    (0..len).map(|i| (i as f64 + 1.0) / n * MAX_VALUE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_is_permutation_of_ramp() {
        let mut generator = PatternGenerator::with_seed(42);
        let seq = generator.shuffled(10).unwrap();
        let mut values = seq.values();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, ramp(10));
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let a = PatternGenerator::with_seed(9).shuffled(32).unwrap();
        let b = PatternGenerator::with_seed(9).shuffled(32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_presets() {
        let mut generator = PatternGenerator::with_seed(1);

        let reverse = generator.preset(Preset::Reverse, 4).unwrap();
        assert_eq!(reverse.values(), vec![100.0, 75.0, 50.0, 25.0]);

        let valley = generator.preset(Preset::Valley, 4).unwrap();
        assert_eq!(valley.values(), vec![100.0, 50.0, 0.0, 50.0]);

        let mountain = generator.preset(Preset::Mountain, 4).unwrap();
        assert_eq!(mountain.values(), vec![0.0, 50.0, 100.0, 50.0]);
    }

    #[test]
    fn test_patterns() {
        let mut generator = PatternGenerator::with_seed(3);
        assert!(generator.pattern(InputPattern::Sorted, 20).unwrap().is_sorted());

        let reversed = generator.pattern(InputPattern::Reversed, 20).unwrap();
        assert!(reversed.values().windows(2).all(|w| w[0] > w[1]));

        let nearly = generator.pattern(InputPattern::NearlySorted, 200).unwrap();
        assert_eq!(nearly.len(), 200);
        assert!(nearly.values().iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut generator = PatternGenerator::new();
        assert!(generator.shuffled(0).is_err());
        assert!(generator.preset(Preset::Valley, 0).is_err());
        assert!(generator.pattern(InputPattern::Sorted, 0).is_err());
    }

    #[test]
    fn test_pattern_from_str() {
        assert_eq!("nearly".parse::<InputPattern>().unwrap(), InputPattern::NearlySorted);
        assert_eq!("Reverse".parse::<Preset>().unwrap(), Preset::Reverse);
        assert!(matches!(
            "zigzag".parse::<Preset>(),
            Err(SortlabError::UnknownPattern(_))
        ));
    }
}
