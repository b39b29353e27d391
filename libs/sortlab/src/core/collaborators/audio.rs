// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::time::Duration;

/// C major pentatonic, two octaves.
pub const PENTATONIC_SCALE: [f64; 10] = [
    262.0, 294.0, 330.0, 392.0, 440.0, 523.0, 587.0, 659.0, 784.0, 880.0,
];

/// C5, E5, G5 played once a run completes.
pub const COMPLETION_CHORD: [f64; 3] = [523.25, 659.25, 783.99];

/// Map a value in `[0, 100]` onto the pentatonic table.
pub fn pentatonic_frequency(value: f64) -> f64 {
    let last = PENTATONIC_SCALE.len() - 1;
    let index = ((value / 100.0) * last as f64).floor().max(0.0) as usize;
    PENTATONIC_SCALE[index.min(last)]
}

/// Tone output. Implementations must not block.
pub trait AudioSink: Send + Sync {
    fn play_tone(&self, frequency_hz: f64, duration: Duration);

    fn play_chord(&self, frequencies_hz: &[f64], duration: Duration) {
        for &frequency in frequencies_hz {
            self.play_tone(frequency, duration);
        }
    }
}

/// Audio sink that produces nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_tone(&self, _frequency_hz: f64, _duration: Duration) {}

    fn play_chord(&self, _frequencies_hz: &[f64], _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentatonic_bounds() {
        assert_eq!(pentatonic_frequency(0.0), 262.0);
        assert_eq!(pentatonic_frequency(100.0), 880.0);
        assert_eq!(pentatonic_frequency(-5.0), 262.0);
        assert_eq!(pentatonic_frequency(250.0), 880.0);
    }

    #[test]
    fn test_pentatonic_index_floor() {
        // 50 / 100 * 9 = 4.5 -> index 4
        assert_eq!(pentatonic_frequency(50.0), 440.0);
        // 99.9 / 100 * 9 = 8.99 -> index 8
        assert_eq!(pentatonic_frequency(99.9), 784.0);
    }
}
