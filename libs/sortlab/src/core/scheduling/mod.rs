// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Speed-to-delay policy.

mod speed;

pub use speed::{Pacing, Speed, BATCH_INTERVAL, PAUSE_POLL_INTERVAL};
