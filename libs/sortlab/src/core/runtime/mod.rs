// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Run instances: one algorithm, one owned sequence, one lifecycle.

mod handle;
mod instance;
mod shared;
mod state;
mod stats;

pub use handle::RunHandle;
pub use instance::RunInstance;
pub use state::{RunOutcome, RunState};
pub use stats::{RunStats, SuspensionStats};

pub(crate) use shared::RunShared;
pub(crate) use state::Parking;
pub(crate) use stats::serialize_millis;
