// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Result, SortlabError};

/// At batched pacing only every Nth suspension yields to the host scheduler.
pub const BATCH_INTERVAL: u64 = 20;

/// How often a parked run re-checks its state while paused.
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(50);

const MAX_SPEED: u8 = 100;
const INSTANT_THRESHOLD: u8 = 95;
const BATCH_THRESHOLD: u8 = 98;

/// What a suspension does once it is free to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Block for this long.
    Sleep(Duration),
    /// Zero delay: yield to the host scheduler once.
    Yield,
    /// Zero delay, yielding only every [`BATCH_INTERVAL`] suspensions.
    Batched,
}

impl Pacing {
    /// Delay in milliseconds, zero for the instant regimes.
    pub fn delay_ms(&self) -> u64 {
        match self {
            Self::Sleep(d) => d.as_millis() as u64,
            Self::Yield | Self::Batched => 0,
        }
    }
}

/// User-facing speed in `0..=100`, higher is faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Speed(u8);

impl Default for Speed {
    fn default() -> Self {
        Self(BATCH_THRESHOLD)
    }
}

impl Speed {
    pub const MAX: Speed = Speed(MAX_SPEED);

    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_SPEED {
            return Err(SortlabError::Configuration(format!(
                "speed must be within 0..={}, got {}",
                MAX_SPEED, value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn pacing(&self) -> Pacing {
        if self.0 >= BATCH_THRESHOLD {
            Pacing::Batched
        } else if self.0 >= INSTANT_THRESHOLD {
            Pacing::Yield
        } else {
            Pacing::Sleep(Duration::from_millis(u64::from(MAX_SPEED - self.0)))
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.pacing().delay_ms()
    }

    /// Short label for a speed readout.
    pub fn label(&self) -> String {
        match self.delay_ms() {
            _ if self.0 >= INSTANT_THRESHOLD => "MAX".to_string(),
            d if d <= 5 => "Fast".to_string(),
            d if d <= 20 => "Medium".to_string(),
            d if d <= 50 => "Slow".to_string(),
            d => format!("{} ms", d),
        }
    }
}

impl TryFrom<u8> for Speed {
    type Error = SortlabError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(v: u8) -> Speed {
        Speed::new(v).unwrap()
    }

    #[test]
    fn test_speed_default() {
        assert_eq!(Speed::default().value(), 98);
        assert_eq!(Speed::default().pacing(), Pacing::Batched);
    }

    #[test]
    fn test_speed_rejects_out_of_range() {
        assert!(Speed::new(101).is_err());
        assert!(Speed::new(100).is_ok());
        assert!(Speed::new(0).is_ok());
    }

    #[test]
    fn test_pacing_piecewise() {
        assert_eq!(speed(0).pacing(), Pacing::Sleep(Duration::from_millis(100)));
        assert_eq!(speed(50).pacing(), Pacing::Sleep(Duration::from_millis(50)));
        assert_eq!(speed(94).pacing(), Pacing::Sleep(Duration::from_millis(6)));
        assert_eq!(speed(95).pacing(), Pacing::Yield);
        assert_eq!(speed(97).pacing(), Pacing::Yield);
        assert_eq!(speed(98).pacing(), Pacing::Batched);
        assert_eq!(speed(100).pacing(), Pacing::Batched);
    }

    #[test]
    fn test_delay_is_zero_in_instant_regime() {
        for v in 95..=100 {
            assert_eq!(speed(v).delay_ms(), 0);
        }
        assert_eq!(speed(30).delay_ms(), 70);
    }

    #[test]
    fn test_speed_label() {
        assert_eq!(speed(100).label(), "MAX");
        assert_eq!(speed(95).label(), "MAX");
        assert_eq!(speed(94).label(), "Medium");
        assert_eq!(speed(90).label(), "Medium");
        assert_eq!(speed(80).label(), "Medium");
        assert_eq!(speed(60).label(), "Slow");
        assert_eq!(speed(10).label(), "90 ms");
    }

    #[test]
    fn test_speed_deserialize_validates() {
        let ok: Speed = serde_yaml::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);
        assert!(serde_yaml::from_str::<Speed>("150").is_err());
    }
}
