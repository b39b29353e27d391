// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use super::{Palette, Rgb};
use crate::core::sequence::{Element, ElementState};

/// Snapshot handed to the renderer after every mutating or highlighting step.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub elements: &'a [Element],
    /// Indices highlighted as being compared.
    pub comparing: &'a [usize],
    /// Indices highlighted as being swapped or written.
    pub swapping: &'a [usize],
    /// Palette snapshot taken when the run launched.
    pub palette: &'a Palette,
}

impl Frame<'_> {
    /// Effective state of the element at `index`: swap highlight wins over
    /// compare highlight, which wins over the stored state.
    pub fn state_at(&self, index: usize) -> ElementState {
        if self.swapping.contains(&index) {
            ElementState::Swapping
        } else if self.comparing.contains(&index) {
            ElementState::Comparing
        } else {
            self.elements
                .get(index)
                .map(|e| e.state)
                .unwrap_or_default()
        }
    }

    pub fn color_at(&self, index: usize) -> Rgb {
        self.palette.resolve(self.state_at(index))
    }
}

/// Draws frames. Must be idempotent; the engine ignores anything it does.
///
/// Frames are delivered with no engine lock held, so a renderer may read
/// the run through its [`RunHandle`](crate::core::runtime::RunHandle).
pub trait Renderer: Send + Sync {
    fn draw(&self, frame: &Frame<'_>);
}

/// Renderer that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&self, _frame: &Frame<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_highlight_precedence() {
        let mut elements = vec![Element::new(1.0, 0), Element::new(2.0, 1), Element::new(3.0, 2)];
        elements[2].state = ElementState::Sorted;
        let palette = Palette::default();
        let frame = Frame {
            elements: &elements,
            comparing: &[0, 1],
            swapping: &[1],
            palette: &palette,
        };

        assert_eq!(frame.state_at(0), ElementState::Comparing);
        assert_eq!(frame.state_at(1), ElementState::Swapping);
        assert_eq!(frame.state_at(2), ElementState::Sorted);
        assert_eq!(frame.color_at(2), palette.sorted);
        assert_eq!(frame.state_at(9), ElementState::Default);
    }
}
