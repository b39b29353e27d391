// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Collaborator traits the run engine reports to.
//!
//! Rendering, audio and theming are owned by the caller and injected into
//! each run instance, so independent instances never share hidden global
//! state.

mod audio;
mod render;
mod theme;

use std::sync::Arc;

pub use audio::{pentatonic_frequency, AudioSink, SilentAudio, COMPLETION_CHORD, PENTATONIC_SCALE};
pub use render::{Frame, NullRenderer, Renderer};
pub use theme::{Palette, Rgb, ThemeRegistry, ThemeSource};

/// The set of collaborators one run instance reports to.
#[derive(Clone)]
pub struct Collaborators {
    pub renderer: Arc<dyn Renderer>,
    pub audio: Arc<dyn AudioSink>,
    pub theme: Arc<dyn ThemeSource>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            renderer: Arc::new(NullRenderer),
            audio: Arc::new(SilentAudio),
            theme: Arc::new(ThemeRegistry::default()),
        }
    }
}

impl Collaborators {
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_audio(mut self, audio: Arc<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_theme(mut self, theme: Arc<dyn ThemeSource>) -> Self {
        self.theme = theme;
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
