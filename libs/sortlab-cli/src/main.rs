// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! sortlab CLI
//!
//! Terminal front end for the sortlab run engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sortlab::{AlgorithmId, InputPattern, Preset, RankMetric};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "sortlab")]
#[command(author, version, about = "Watch sorting algorithms run", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every subcommand that reads `sortlab.yaml`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (default: ./sortlab.yaml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for input generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color theme (dark, midnight, ocean, forest, sunset, neon, retro, light)
    #[arg(long)]
    pub theme: Option<String>,

    /// Suppress audio cues
    #[arg(long)]
    pub mute: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single algorithm
    Run {
        /// Algorithm to run (see `sortlab list`)
        #[arg(short, long)]
        algorithm: Option<AlgorithmId>,

        /// Number of elements
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Speed 0-100, higher is faster
        #[arg(short, long)]
        speed: Option<u8>,

        /// Start from a preset shape instead of a shuffle (reverse, valley, mountain)
        #[arg(long, conflicts_with = "values")]
        preset: Option<Preset>,

        /// Comma-separated custom input, e.g. "5,2,8,1,9"
        #[arg(long)]
        values: Option<String>,

        /// Advance one operation per Enter press
        #[arg(long)]
        step: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Run two algorithms side by side on the same input
    Compare {
        /// Left lane algorithm
        #[arg(long, default_value = "bubble")]
        left: AlgorithmId,

        /// Right lane algorithm
        #[arg(long, default_value = "quick")]
        right: AlgorithmId,

        /// Number of elements
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Speed 0-100, higher is faster
        #[arg(short, long)]
        speed: Option<u8>,

        /// Start from a preset shape instead of a shuffle
        #[arg(long)]
        preset: Option<Preset>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Race algorithms at full speed and rank them
    Bench {
        /// Input pattern (random, sorted, reverse, nearly)
        #[arg(short, long)]
        pattern: Option<InputPattern>,

        /// Number of elements
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Ranking metric (time or comparisons)
        #[arg(short, long)]
        metric: Option<RankMetric>,

        /// Algorithms to include (default: all, or the config file's list)
        #[arg(short, long = "algorithm", value_name = "ALGORITHM")]
        algorithms: Vec<AlgorithmId>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the available algorithms
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Run {
            algorithm,
            size,
            speed,
            preset,
            values,
            step,
            config,
        }) => {
            commands::run::run(commands::run::RunOptions {
                algorithm,
                size,
                speed,
                preset,
                values,
                step,
                config,
            })
            .await?;
        }
        Some(Commands::Compare {
            left,
            right,
            size,
            speed,
            preset,
            config,
        }) => {
            commands::compare::run(left, right, size, speed, preset, &config).await?;
        }
        Some(Commands::Bench {
            pattern,
            size,
            metric,
            algorithms,
            format,
            config,
        }) => {
            commands::bench::run(pattern, size, metric, algorithms, format, &config).await?;
        }
        Some(Commands::List { format }) => commands::list::algorithms(format)?,
        None => {
            // No subcommand: show help
            Cli::parse_from(["sortlab", "--help"]);
        }
    }

    Ok(())
}
