// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Context, Result};
use serde::Serialize;
use sortlab::{
    AlgorithmId, Benchmark, BenchmarkReport, InputPattern, LeaderboardEntry, RankMetric,
    VisualizerConfig,
};

use super::{describe_lane, load_config, pause_on_ctrl_c, theme};
use crate::terminal::{self, Screen};
use crate::{ConfigArgs, OutputFormat};

#[derive(Serialize)]
struct BenchOutput<'a> {
    metric: RankMetric,
    leaderboard: &'a [LeaderboardEntry],
    report: &'a BenchmarkReport,
}

/// Race the selected algorithms and print the leaderboard.
pub async fn run(
    pattern: Option<InputPattern>,
    size: Option<usize>,
    metric: Option<RankMetric>,
    algorithms: Vec<AlgorithmId>,
    format: OutputFormat,
    args: &ConfigArgs,
) -> Result<()> {
    let mut config: VisualizerConfig = load_config(args)?;
    let settings = &mut config.benchmark;
    if let Some(pattern) = pattern {
        settings.pattern = pattern;
    }
    if let Some(size) = size {
        settings.array_size = size;
    }
    if let Some(metric) = metric {
        settings.metric = metric;
    }
    if !algorithms.is_empty() {
        settings.algorithms = algorithms;
    }
    config.validate().context("Invalid configuration")?;
    let settings = &config.benchmark;

    // JSON output keeps stdout clean.
    let screen = (format == OutputFormat::Pretty).then(|| Screen::new(settings.algorithms.len()));
    let theme = theme(&config)?;
    let mut bench = Benchmark::from_settings(settings, config.seed)?.with_collaborators(|algorithm| {
        let row = settings
            .algorithms
            .iter()
            .position(|a| *a == algorithm)
            .unwrap_or_default();
        terminal::collaborators(
            screen.as_ref().map(|screen| (screen, row)),
            algorithm,
            theme.clone(),
            !config.sound,
        )
    });

    if format == OutputFormat::Pretty {
        println!(
            "Benchmark: {} algorithms on {} {} elements (Ctrl+C aborts)",
            settings.algorithms.len(),
            settings.array_size,
            settings.pattern
        );
    }

    let handle = bench.handle();
    let ctrl_c = pause_on_ctrl_c(move || {
        let running = handle.abort();
        tracing::info!("Aborting benchmark ({} lanes still running)", running);
    });
    let report = bench.run().await;
    ctrl_c.abort();

    if let Some(screen) = &screen {
        screen.commit();
    }

    let leaderboard = report.leaderboard(settings.metric);
    match format {
        OutputFormat::Json => {
            let output = BenchOutput {
                metric: settings.metric,
                leaderboard: &leaderboard,
                report: &report,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize report")?
            );
        }
        OutputFormat::Pretty => print_leaderboard(&report, &leaderboard, settings.metric),
    }
    Ok(())
}

fn print_leaderboard(report: &BenchmarkReport, leaderboard: &[LeaderboardEntry], metric: RankMetric) {
    println!();
    println!(
        "Leaderboard by {} ({} {} elements)",
        metric, report.size, report.pattern
    );
    println!(
        "{:>3}  {:<16} {:>12} {:>12} {:>10}",
        "#", "Algorithm", "Time (ms)", "Comparisons", "Swaps"
    );
    for (rank, entry) in leaderboard.iter().enumerate() {
        println!(
            "{:>3}  {:<16} {:>12.1} {:>12} {:>10}",
            rank + 1,
            entry.algorithm.display_name(),
            entry.elapsed.as_secs_f64() * 1000.0,
            entry.comparisons,
            entry.swaps
        );
    }

    let unranked: Vec<_> = report
        .lanes
        .iter()
        .filter(|lane| !lane.status.is_completed())
        .collect();
    if !unranked.is_empty() {
        println!();
        for lane in unranked {
            println!("     {}", describe_lane(lane));
        }
    }
    if report.aborted {
        println!();
        println!(
            "Benchmark aborted: {} of {} lanes completed",
            leaderboard.len(),
            report.lanes.len()
        );
    }
}
