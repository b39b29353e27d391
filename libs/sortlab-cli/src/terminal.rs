// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Terminal collaborators: a throttled multi-row bar chart and a tracing
//! audio sink.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use sortlab::{
    AlgorithmId, AudioSink, Collaborators, Frame, NullRenderer, Renderer, SilentAudio,
    ThemeSource, MAX_VALUE,
};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const DEFAULT_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 16;
const REPAINT_INTERVAL: Duration = Duration::from_millis(33);

/// A block of terminal rows, one per lane, repainted in place.
pub struct Screen {
    width: usize,
    state: Mutex<ScreenState>,
}

struct ScreenState {
    rows: Vec<String>,
    painted: bool,
    last_paint: Option<Instant>,
}

impl Screen {
    pub fn new(rows: usize) -> Arc<Self> {
        Arc::new(Self {
            width: DEFAULT_WIDTH,
            state: Mutex::new(ScreenState {
                rows: vec![String::new(); rows],
                painted: false,
                last_paint: None,
            }),
        })
    }

    /// Renderer drawing into `row`.
    pub fn lane(self: &Arc<Self>, row: usize, label: impl Into<String>) -> Arc<LaneRenderer> {
        Arc::new(LaneRenderer {
            screen: self.clone(),
            row,
            label: label.into(),
        })
    }

    /// Paint the latest rows and leave the cursor below them, so anything
    /// printed next does not get overwritten.
    pub fn commit(&self) {
        let mut state = self.state.lock();
        Self::paint(&mut state);
        state.painted = false;
    }

    fn update(&self, row: usize, line: String) {
        let mut state = self.state.lock();
        if let Some(slot) = state.rows.get_mut(row) {
            *slot = line;
        }
        let due = state
            .last_paint
            .is_none_or(|at| at.elapsed() >= REPAINT_INTERVAL);
        if due {
            Self::paint(&mut state);
        }
    }

    fn paint(state: &mut ScreenState) {
        let mut out = std::io::stdout().lock();
        if state.painted {
            let _ = write!(out, "\x1b[{}A", state.rows.len());
        }
        for row in &state.rows {
            let _ = writeln!(out, "\r\x1b[2K{}", row);
        }
        let _ = out.flush();
        state.painted = true;
        state.last_paint = Some(Instant::now());
    }

    fn render(&self, label: &str, frame: &Frame<'_>) -> String {
        let mut line = format!("{:<width$} ", label, width = LABEL_WIDTH);
        let len = frame.elements.len();
        if len == 0 {
            line.push_str("(empty)");
            return line;
        }
        let columns = self.width.min(len);
        for column in 0..columns {
            let index = column * len / columns;
            let value = frame.elements[index].value;
            let level = ((value / MAX_VALUE) * (BARS.len() - 1) as f64).round() as usize;
            let color = frame.color_at(index);
            line.push_str(&format!(
                "\x1b[38;2;{};{};{}m{}",
                color.r,
                color.g,
                color.b,
                BARS[level.min(BARS.len() - 1)]
            ));
        }
        line.push_str("\x1b[0m");
        line
    }
}

/// One lane of a [`Screen`].
pub struct LaneRenderer {
    screen: Arc<Screen>,
    row: usize,
    label: String,
}

impl Renderer for LaneRenderer {
    fn draw(&self, frame: &Frame<'_>) {
        let line = self.screen.render(&self.label, frame);
        self.screen.update(self.row, line);
    }
}

/// The core produces no sound; cues are logged at trace level.
#[derive(Debug, Clone)]
pub struct TracingAudio {
    lane: AlgorithmId,
}

impl TracingAudio {
    pub fn new(lane: AlgorithmId) -> Self {
        Self { lane }
    }
}

impl AudioSink for TracingAudio {
    fn play_tone(&self, frequency_hz: f64, duration: Duration) {
        tracing::trace!(
            lane = %self.lane,
            frequency_hz,
            duration_ms = duration.as_millis() as u64,
            "tone"
        );
    }

    fn play_chord(&self, frequencies_hz: &[f64], duration: Duration) {
        tracing::trace!(
            lane = %self.lane,
            ?frequencies_hz,
            duration_ms = duration.as_millis() as u64,
            "chord"
        );
    }
}

/// Collaborators for one lane: drawn into `screen` at the given row when
/// there is one, tracing audio unless `mute`.
pub fn collaborators(
    screen: Option<(&Arc<Screen>, usize)>,
    algorithm: AlgorithmId,
    theme: Arc<dyn ThemeSource>,
    mute: bool,
) -> Collaborators {
    let renderer: Arc<dyn Renderer> = match screen {
        Some((screen, row)) => screen.lane(row, algorithm.display_name()),
        None => Arc::new(NullRenderer),
    };
    let audio: Arc<dyn AudioSink> = if mute {
        Arc::new(SilentAudio)
    } else {
        Arc::new(TracingAudio::new(algorithm))
    };
    Collaborators::default()
        .with_renderer(renderer)
        .with_audio(audio)
        .with_theme(theme)
}
