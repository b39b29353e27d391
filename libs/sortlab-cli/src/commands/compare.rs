// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Context, Result};
use sortlab::{AlgorithmId, LaneStatus, PairwiseSession, PatternGenerator, Preset, Speed};

use super::{describe_lane, load_config, pause_on_ctrl_c, theme, Prompt};
use crate::terminal::{self, Screen};
use crate::ConfigArgs;

/// Run two algorithms side by side on one input.
pub async fn run(
    left: AlgorithmId,
    right: AlgorithmId,
    size: Option<usize>,
    speed: Option<u8>,
    preset: Option<Preset>,
    args: &ConfigArgs,
) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(size) = size {
        config.array_size = size;
    }
    if let Some(speed) = speed {
        config.speed = Speed::new(speed).context("Invalid --speed")?;
    }
    config.validate().context("Invalid configuration")?;

    let mut generator = PatternGenerator::from_seed(config.seed);
    let input = match preset {
        Some(preset) => generator.preset(preset, config.array_size)?,
        None => generator.shuffled(config.array_size)?,
    };

    let theme = theme(&config)?;
    let screen = Screen::new(2);
    let mut session = PairwiseSession::new(left, right, input)
        .with_generator(generator)
        .with_speed(config.speed)
        .with_collaborators(
            terminal::collaborators(Some((&screen, 0)), left, theme.clone(), !config.sound),
            terminal::collaborators(Some((&screen, 1)), right, theme, !config.sound),
        );

    println!(
        "{} vs {} | {} elements | speed {} ({})",
        left.display_name(),
        right.display_name(),
        session.input().len(),
        config.speed,
        config.speed.label()
    );

    let [left_handle, right_handle] = session.handles();
    let ctrl_c = pause_on_ctrl_c(move || {
        left_handle.pause();
        right_handle.pause();
    });

    let mut prompt = Prompt::default();
    let result = loop {
        let report = session.play().await;
        screen.commit();

        let paused = [&report.left, &report.right]
            .iter()
            .any(|lane| lane.status == LaneStatus::Paused);
        if !paused {
            println!("{}", describe_lane(&report.left));
            println!("{}", describe_lane(&report.right));
            break Ok(());
        }

        match prompt.ask("[paused] Enter = resume, q = quit:").await {
            Ok(None) => break Ok(()),
            Ok(Some(answer)) if answer == "q" => break Ok(()),
            Ok(Some(_)) => {}
            Err(e) => break Err(e),
        }
    };

    ctrl_c.abort();
    result
}
