// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::{Element, ElementState, PatternGenerator, MAX_VALUE, MIN_VALUE};
use crate::core::{Result, SortlabError};

/// Ordered, fixed-length list of elements owned by one run instance.
///
/// Cloning produces a deep copy; instances never alias each other's
/// sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    /// Build a sequence from raw values. Each value must be finite and
    /// within `[0, 100]`.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let mut elements = Vec::with_capacity(values.len());
        for (origin, &value) in values.iter().enumerate() {
            if !value.is_finite() || !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                return Err(SortlabError::InvalidInput(format!(
                    "value {} at position {} is outside [{}, {}]",
                    value, origin, MIN_VALUE, MAX_VALUE
                )));
            }
            // -0.0 and 0.0 must order identically under total_cmp
            let value = if value == 0.0 { 0.0 } else { value };
            elements.push(Element::new(value, origin));
        }
        Ok(Self { elements })
    }

    /// Parse user-supplied comma-separated numbers and normalize them onto
    /// the `[0, 100]` value domain.
    pub fn parse_custom(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SortlabError::InvalidInput(
                "Please enter comma-separated numbers (e.g. 5,2,8,1,9)".into(),
            ));
        }

        let mut raw = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            let value: f64 = token.parse().map_err(|_| {
                SortlabError::InvalidInput(format!("'{}' is not a number", token))
            })?;
            if !value.is_finite() {
                return Err(SortlabError::InvalidInput(format!(
                    "'{}' is not a finite number",
                    token
                )));
            }
            raw.push(value);
        }

        let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
        let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max - min == 0.0 { 1.0 } else { max - min };

        let normalized: Vec<f64> = raw
            .iter()
            .map(|v| ((v - min) / range * MAX_VALUE).clamp(MIN_VALUE, MAX_VALUE))
            .collect();
        Self::from_values(&normalized)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn origins(&self) -> Vec<usize> {
        self.elements.iter().map(|e| e.origin).collect()
    }

    /// Non-decreasing by value.
    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| pair[0].value <= pair[1].value)
    }

    pub fn mark_all_sorted(&mut self) {
        for element in &mut self.elements {
            element.state = ElementState::Sorted;
        }
    }

    pub fn reset_states(&mut self) {
        for element in &mut self.elements {
            element.state = ElementState::Default;
        }
    }

    /// Change the length, keeping the leading values and appending uniformly
    /// random ones. All states are cleared.
    pub fn resize(&mut self, len: usize, generator: &mut PatternGenerator) -> Result<()> {
        if len == 0 {
            return Err(SortlabError::Configuration(
                "sequence length must be at least 1".into(),
            ));
        }
        self.elements.truncate(len);
        self.reset_states();
        while self.elements.len() < len {
            let origin = self.elements.len();
            self.elements
                .push(Element::new(generator.uniform_value(), origin));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_rejects_out_of_range() {
        assert!(Sequence::from_values(&[1.0, 101.0]).is_err());
        assert!(Sequence::from_values(&[-1.0]).is_err());
        assert!(Sequence::from_values(&[f64::NAN]).is_err());
        assert!(Sequence::from_values(&[0.0, 100.0]).is_ok());
    }

    #[test]
    fn test_from_values_tags_origin() {
        let seq = Sequence::from_values(&[5.0, 2.0, 8.0]).unwrap();
        assert_eq!(seq.origins(), vec![0, 1, 2]);
        assert_eq!(seq.values(), vec![5.0, 2.0, 8.0]);
    }

    #[test]
    fn test_parse_custom_normalizes() {
        let seq = Sequence::parse_custom(" 10, 20 ,30").unwrap();
        assert_eq!(seq.values(), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_parse_custom_equal_values() {
        let seq = Sequence::parse_custom("7,7,7").unwrap();
        assert_eq!(seq.values(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_custom_rejects_garbage() {
        assert!(matches!(
            Sequence::parse_custom(""),
            Err(SortlabError::InvalidInput(_))
        ));
        assert!(matches!(
            Sequence::parse_custom("1, two, 3"),
            Err(SortlabError::InvalidInput(_))
        ));
        assert!(matches!(
            Sequence::parse_custom("1,,3"),
            Err(SortlabError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_sorted() {
        assert!(Sequence::default().is_sorted());
        assert!(Sequence::from_values(&[1.0, 1.0, 2.0]).unwrap().is_sorted());
        assert!(!Sequence::from_values(&[2.0, 1.0]).unwrap().is_sorted());
    }

    #[test]
    fn test_resize_keeps_prefix() {
        let mut generator = PatternGenerator::with_seed(7);
        let mut seq = Sequence::from_values(&[5.0, 2.0, 8.0]).unwrap();

        seq.resize(5, &mut generator).unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(&seq.values()[..3], &[5.0, 2.0, 8.0]);
        assert!(seq.values()[3..].iter().all(|v| (0.0..=100.0).contains(v)));

        seq.resize(2, &mut generator).unwrap();
        assert_eq!(seq.values(), vec![5.0, 2.0]);
    }

    #[test]
    fn test_resize_to_zero_is_rejected() {
        let mut generator = PatternGenerator::with_seed(7);
        let mut seq = Sequence::from_values(&[5.0, 2.0]).unwrap();
        assert!(seq.resize(0, &mut generator).is_err());
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Sequence::from_values(&[3.0, 1.0]).unwrap();
        let mut copy = original.clone();
        copy.elements_mut().swap(0, 1);
        assert_eq!(original.values(), vec![3.0, 1.0]);
        assert_eq!(copy.values(), vec![1.0, 3.0]);
    }
}
