// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

/// Presentation tag carried by every element.
///
/// Never consulted by an ordering decision. Renderers resolve it to a color
/// through the theme collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
}

/// One bar of the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Ordering key in `[0, 100]`.
    pub value: f64,
    pub state: ElementState,
    /// Position of this element in the generated input. Identity only.
    pub origin: usize,
}

impl Element {
    pub fn new(value: f64, origin: usize) -> Self {
        Self {
            value,
            state: ElementState::Default,
            origin,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.state == ElementState::Sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_state_default() {
        assert_eq!(ElementState::default(), ElementState::Default);
    }

    #[test]
    fn test_new_element_is_unmarked() {
        let element = Element::new(42.0, 3);
        assert_eq!(element.state, ElementState::Default);
        assert_eq!(element.origin, 3);
        assert!(!element.is_sorted());
    }

    #[test]
    fn test_element_state_serializes_lowercase() {
        let json = serde_json::to_string(&ElementState::Comparing).unwrap();
        assert_eq!(json, "\"comparing\"");
    }
}
