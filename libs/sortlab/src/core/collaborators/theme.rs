// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::sequence::ElementState;
use crate::core::{Result, SortlabError};

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(SortlabError::Configuration(format!("invalid color '{}'", s)));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::hex)
            .map_err(|_| SortlabError::Configuration(format!("invalid color '{}'", s)))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Colors for each element state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub default: Rgb,
    pub comparing: Rgb,
    pub swapping: Rgb,
    pub sorted: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        THEMES[0].1
    }
}

impl Palette {
    const fn new(default: u32, comparing: u32, swapping: u32, sorted: u32) -> Self {
        Self {
            default: Rgb::hex(default),
            comparing: Rgb::hex(comparing),
            swapping: Rgb::hex(swapping),
            sorted: Rgb::hex(sorted),
        }
    }

    pub fn resolve(&self, state: ElementState) -> Rgb {
        match state {
            ElementState::Default => self.default,
            ElementState::Comparing => self.comparing,
            ElementState::Swapping => self.swapping,
            ElementState::Sorted => self.sorted,
        }
    }
}

const THEMES: [(&str, Palette); 8] = [
    ("dark", Palette::new(0x7dd3fc, 0xc084fc, 0x4ade80, 0x4ade80)),
    ("midnight", Palette::new(0x6366f1, 0xf472b6, 0xfbbf24, 0x34d399)),
    ("ocean", Palette::new(0x0ea5e9, 0xf97316, 0x22d3ee, 0x10b981)),
    ("forest", Palette::new(0x22c55e, 0xfacc15, 0xf97316, 0x86efac)),
    ("sunset", Palette::new(0xf97316, 0xec4899, 0xfbbf24, 0xfb7185)),
    ("neon", Palette::new(0xe879f9, 0x22d3ee, 0xa3e635, 0x4ade80)),
    ("retro", Palette::new(0xfbbf24, 0xef4444, 0x22c55e, 0xf59e0b)),
    ("light", Palette::new(0x3b82f6, 0xec4899, 0x22c55e, 0x10b981)),
];

/// Resolves element states to colors for the active theme.
pub trait ThemeSource: Send + Sync {
    fn current_colors(&self) -> Palette;
}

/// The built-in themes plus a current selection.
#[derive(Debug)]
pub struct ThemeRegistry {
    current: RwLock<&'static str>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self {
            current: RwLock::new(THEMES[0].0),
        }
    }
}

impl ThemeRegistry {
    pub fn new(theme: &str) -> Result<Self> {
        let registry = Self::default();
        registry.set_theme(theme)?;
        Ok(registry)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|(name, _)| *name)
    }

    pub fn contains(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    pub fn current(&self) -> &'static str {
        *self.current.read()
    }

    pub fn set_theme(&self, name: &str) -> Result<()> {
        let (name, _) = Self::lookup(name).ok_or_else(|| {
            SortlabError::Configuration(format!(
                "unknown theme '{}' (expected one of: {})",
                name,
                Self::names().collect::<Vec<_>>().join(", ")
            ))
        })?;
        *self.current.write() = name;
        tracing::debug!("Theme set to {}", name);
        Ok(())
    }

    fn lookup(name: &str) -> Option<(&'static str, Palette)> {
        THEMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .copied()
    }
}

impl ThemeSource for ThemeRegistry {
    fn current_colors(&self) -> Palette {
        Self::lookup(self.current()).map(|(_, p)| p).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let registry = ThemeRegistry::default();
        assert_eq!(registry.current(), "dark");
        assert_eq!(registry.current_colors().default, Rgb::hex(0x7dd3fc));
    }

    #[test]
    fn test_set_theme() {
        let registry = ThemeRegistry::default();
        registry.set_theme("Ocean").unwrap();
        assert_eq!(registry.current(), "ocean");
        assert_eq!(registry.current_colors().comparing.to_string(), "#f97316");
    }

    #[test]
    fn test_unknown_theme_rejected_and_unchanged() {
        let registry = ThemeRegistry::new("retro").unwrap();
        assert!(registry.set_theme("vaporwave").is_err());
        assert_eq!(registry.current(), "retro");
    }

    #[test]
    fn test_palette_resolve() {
        let palette = Palette::default();
        assert_eq!(palette.resolve(ElementState::Comparing), Rgb::hex(0xc084fc));
        assert_eq!(palette.resolve(ElementState::Sorted), Rgb::hex(0x4ade80));
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#10b981".parse::<Rgb>().unwrap(), Rgb { r: 0x10, g: 0xb9, b: 0x81 });
        assert!("#12".parse::<Rgb>().is_err());
        assert!("zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_eight_themes() {
        assert_eq!(ThemeRegistry::names().count(), 8);
        assert!(ThemeRegistry::contains("neon"));
    }
}
