// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Visualizer configuration via `sortlab.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::algorithms::AlgorithmId;
use crate::core::collaborators::ThemeRegistry;
use crate::core::orchestrator::RankMetric;
use crate::core::scheduling::Speed;
use crate::core::sequence::InputPattern;
use crate::core::{Result, SortlabError};

/// Settings for the N-way benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkSettings {
    pub array_size: usize,
    pub pattern: InputPattern,
    /// Leaderboard ranking metric.
    pub metric: RankMetric,
    /// Lanes, in display order.
    pub algorithms: Vec<AlgorithmId>,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            array_size: 50,
            pattern: InputPattern::Random,
            metric: RankMetric::Time,
            algorithms: AlgorithmId::ALL.to_vec(),
        }
    }
}

/// Configuration from `sortlab.yaml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub algorithm: AlgorithmId,
    pub array_size: usize,
    /// 0..=100, higher is faster.
    pub speed: Speed,
    pub theme: String,
    /// Seed for input generation. Unseeded when absent.
    pub seed: Option<u64>,
    /// Whether audio cues are emitted.
    pub sound: bool,
    pub benchmark: BenchmarkSettings,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::Bubble,
            array_size: 300,
            speed: Speed::default(),
            theme: "dark".to_string(),
            seed: None,
            sound: true,
            benchmark: BenchmarkSettings::default(),
        }
    }
}

impl VisualizerConfig {
    /// Configuration file name.
    pub const FILE_NAME: &'static str = "sortlab.yaml";

    /// Load configuration from a directory. Returns error if the file is
    /// missing, cannot be parsed, or fails validation.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_file(&dir.join(Self::FILE_NAME))
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            SortlabError::Configuration(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            SortlabError::Configuration(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;
        config.validate()?;

        tracing::info!("Loaded visualizer config from {}", config_path.display());
        Ok(config)
    }

    /// Load configuration from a directory, returning defaults if the file is
    /// missing, unparseable or invalid.
    pub fn load_or_default(dir: &Path) -> Self {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(
                "No {} found in {}, using defaults",
                Self::FILE_NAME,
                dir.display()
            );
            return Self::default();
        }

        match Self::load_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Reject values no run could start from.
    pub fn validate(&self) -> Result<()> {
        if self.array_size == 0 {
            return Err(SortlabError::Configuration(
                "array_size must be at least 1".into(),
            ));
        }
        if !ThemeRegistry::contains(&self.theme) {
            return Err(SortlabError::Configuration(format!(
                "Unknown theme '{}' (expected one of: {})",
                self.theme,
                ThemeRegistry::names().collect::<Vec<_>>().join(", ")
            )));
        }
        if self.benchmark.array_size == 0 {
            return Err(SortlabError::Configuration(
                "benchmark.array_size must be at least 1".into(),
            ));
        }
        if self.benchmark.algorithms.is_empty() {
            return Err(SortlabError::Configuration(
                "benchmark.algorithms must name at least one algorithm".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(VisualizerConfig::FILE_NAME)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = VisualizerConfig::default();
        assert_eq!(config.algorithm, AlgorithmId::Bubble);
        assert_eq!(config.array_size, 300);
        assert_eq!(config.speed.value(), 98);
        assert_eq!(config.theme, "dark");
        assert!(config.sound);
        assert_eq!(config.benchmark.array_size, 50);
        assert_eq!(config.benchmark.algorithms.len(), 16);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let dir = TempDir::new().unwrap();
        assert!(VisualizerConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            VisualizerConfig::load_or_default(dir.path()),
            VisualizerConfig::default()
        );
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
algorithm: quick
array_size: 64
speed: 40
theme: ocean
seed: 7
benchmark:
  pattern: nearly
  metric: comparisons
  algorithms: [merge, tim, radix]
"#,
        );

        let config = VisualizerConfig::load(dir.path()).unwrap();
        assert_eq!(config.algorithm, AlgorithmId::Quick);
        assert_eq!(config.array_size, 64);
        assert_eq!(config.speed.value(), 40);
        assert_eq!(config.theme, "ocean");
        assert_eq!(config.seed, Some(7));
        assert!(config.sound);
        assert_eq!(config.benchmark.array_size, 50);
        assert_eq!(config.benchmark.pattern, InputPattern::NearlySorted);
        assert_eq!(config.benchmark.metric, RankMetric::Comparisons);
        assert_eq!(
            config.benchmark.algorithms,
            vec![AlgorithmId::Merge, AlgorithmId::Tim, AlgorithmId::Radix]
        );
    }

    #[test]
    fn test_load_empty_mapping() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "{}");
        assert_eq!(
            VisualizerConfig::load(dir.path()).unwrap(),
            VisualizerConfig::default()
        );
    }

    #[test]
    fn test_speed_out_of_range_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "speed: 150\n");
        assert!(matches!(
            VisualizerConfig::load(dir.path()),
            Err(SortlabError::Configuration(_))
        ));
    }

    #[test]
    fn test_unknown_algorithm_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "algorithm: bogo\n");
        assert!(VisualizerConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_values() {
        let config = VisualizerConfig {
            array_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = VisualizerConfig {
            theme: "plaid".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = VisualizerConfig::default();
        config.benchmark.algorithms.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_on_invalid_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "array_size: 0\n");
        assert_eq!(
            VisualizerConfig::load_or_default(dir.path()),
            VisualizerConfig::default()
        );
    }
}
