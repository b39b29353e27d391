// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Element and Sequence model plus input generation.

mod element;
mod patterns;
#[allow(clippy::module_inception)]
mod sequence;

pub use element::{Element, ElementState};
pub use patterns::{InputPattern, PatternGenerator, Preset};
pub use sequence::Sequence;

/// Lower bound of the value domain.
pub const MIN_VALUE: f64 = 0.0;
/// Upper bound of the value domain.
pub const MAX_VALUE: f64 = 100.0;
