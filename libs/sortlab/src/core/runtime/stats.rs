// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::time::Duration;

use serde::{Serialize, Serializer};
use tokio::time::Instant;

/// Operation counters and elapsed running time of one run instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl RunStats {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Scheduler telemetry: how often the body suspended and how often that
/// actually handed control back to the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SuspensionStats {
    pub suspensions: u64,
    pub host_yields: u64,
}

pub(crate) fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Accumulates running time only; stopped while parked and frozen once the
/// algorithm body has finished.
#[derive(Debug, Default)]
pub(crate) struct Stopwatch {
    accumulated: Duration,
    started: Option<Instant>,
    frozen: bool,
}

impl Stopwatch {
    pub fn start(&mut self) {
        if self.started.is_none() && !self.frozen {
            self.started = Some(Instant::now());
        }
    }

    pub fn freeze(&mut self) {
        self.stop();
        self.frozen = true;
    }

    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.accumulated += started.elapsed();
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started = None;
        self.frozen = false;
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started.map(|s| s.elapsed()).unwrap_or_default()
    }
}
