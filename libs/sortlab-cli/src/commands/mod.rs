// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

pub mod bench;
pub mod compare;
pub mod list;
pub mod run;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use sortlab::{LaneReport, LaneStatus, ThemeRegistry, VisualizerConfig};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::task::JoinHandle;

use crate::ConfigArgs;

/// Load `sortlab.yaml` (explicit path, or the working directory if present)
/// and apply the shared flag overrides.
pub fn load_config(args: &ConfigArgs) -> Result<VisualizerConfig> {
    let mut config = match &args.config {
        Some(path) => VisualizerConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            VisualizerConfig::load_or_default(&cwd)
        }
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if args.mute {
        config.sound = false;
    }
    Ok(config)
}

pub fn theme(config: &VisualizerConfig) -> Result<Arc<ThemeRegistry>> {
    let registry = ThemeRegistry::new(&config.theme).context("Invalid theme")?;
    Ok(Arc::new(registry))
}

/// Call `pause` on every Ctrl+C until the returned task is aborted.
pub fn pause_on_ctrl_c(pause: impl Fn() + Send + 'static) -> JoinHandle<()> {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            pause();
        }
    })
}

/// Line-oriented prompt on stdin.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Prompt {
    /// Trimmed, lowercased answer, or `None` at end of input.
    pub async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{} ", question);
        std::io::stdout().flush().context("Failed to write prompt")?;
        let line = self
            .lines
            .next_line()
            .await
            .context("Failed to read from stdin")?;
        Ok(line.map(|l| l.trim().to_lowercase()))
    }
}

/// One summary line for a lane.
pub fn describe_lane(lane: &LaneReport) -> String {
    let name = lane.algorithm.display_name();
    match &lane.status {
        LaneStatus::Completed => format!(
            "{:<16} {:>10.1} ms {:>10} comparisons {:>10} swaps",
            name,
            lane.stats.elapsed.as_secs_f64() * 1000.0,
            lane.stats.comparisons,
            lane.stats.swaps
        ),
        LaneStatus::Failed { message } => format!("{:<16} failed: {}", name, message),
        LaneStatus::Paused => format!(
            "{:<16} paused after {} comparisons, {} swaps",
            name, lane.stats.comparisons, lane.stats.swaps
        ),
        LaneStatus::Waiting => format!("{:<16} waiting", name),
    }
}
