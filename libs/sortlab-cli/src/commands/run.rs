// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Context, Result};
use sortlab::{AlgorithmId, Preset, RunInstance, RunOutcome, Sequence, Speed};

use super::{load_config, pause_on_ctrl_c, theme, Prompt};
use crate::terminal::{self, Screen};
use crate::ConfigArgs;

pub struct RunOptions {
    pub algorithm: Option<AlgorithmId>,
    pub size: Option<usize>,
    pub speed: Option<u8>,
    pub preset: Option<Preset>,
    pub values: Option<String>,
    pub step: bool,
    pub config: ConfigArgs,
}

/// Run one algorithm in the terminal.
pub async fn run(options: RunOptions) -> Result<()> {
    let mut config = load_config(&options.config)?;
    if let Some(algorithm) = options.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(size) = options.size {
        config.array_size = size;
    }
    if let Some(speed) = options.speed {
        config.speed = Speed::new(speed).context("Invalid --speed")?;
    }
    config.validate().context("Invalid configuration")?;

    // Parse custom input before anything is built from it.
    let custom = options
        .values
        .as_deref()
        .map(Sequence::parse_custom)
        .transpose()
        .context("Invalid --values")?;

    let screen = Screen::new(1);
    let collaborators =
        terminal::collaborators(Some((&screen, 0)), config.algorithm, theme(&config)?, !config.sound);
    let mut run = RunInstance::from_config(&config, collaborators)?;
    if let Some(sequence) = custom {
        run.load_sequence(sequence);
    } else if let Some(preset) = options.preset {
        run.set_preset(preset)?;
    }

    let info = config.algorithm.info();
    println!(
        "{} ({} avg, {} space) | {} elements | speed {} ({})",
        info.name,
        info.average,
        info.space,
        run.len(),
        config.speed,
        config.speed.label()
    );

    let handle = run.handle();
    let ctrl_c = pause_on_ctrl_c(move || {
        handle.pause();
    });
    let finished = drive(&mut run, &screen, options.step).await;
    ctrl_c.abort();

    if finished? {
        let stats = run.stats();
        println!(
            "{} finished: {} comparisons, {} swaps in {} ms",
            info.name,
            stats.comparisons,
            stats.swaps,
            stats.elapsed_ms()
        );
    }
    Ok(())
}

/// Drive until completion or until the user quits. Returns whether the
/// run completed.
async fn drive(run: &mut RunInstance, screen: &Screen, step: bool) -> Result<bool> {
    let mut prompt = Prompt::default();
    let mut outcome = if step { run.step().await? } else { run.play().await? };

    loop {
        screen.commit();
        outcome = match outcome {
            RunOutcome::Completed => return Ok(true),
            RunOutcome::Ignored => return Ok(false),
            RunOutcome::AwaitingStep => {
                let stats = run.stats();
                let question = format!(
                    "[step] {} comparisons, {} swaps. Enter = step, c = continue, q = quit:",
                    stats.comparisons, stats.swaps
                );
                match prompt.ask(&question).await?.as_deref() {
                    None | Some("q") => return Ok(false),
                    Some("c") => run.play().await?,
                    Some(_) => run.step().await?,
                }
            }
            RunOutcome::Paused => {
                match prompt
                    .ask("[paused] Enter = resume, s = step, q = quit:")
                    .await?
                    .as_deref()
                {
                    None | Some("q") => return Ok(false),
                    Some("s") => run.step().await?,
                    Some(_) => run.play().await?,
                }
            }
        };
    }
}
