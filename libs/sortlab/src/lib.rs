// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! sortlab
//!
//! Sixteen instrumented sorting algorithms running on a cooperative,
//! single-threaded run engine. Every comparison, swap and write suspends so
//! an observer (renderer, audio cue, stepper) can react, and every run can be
//! paused, resumed, single-stepped or driven side by side with others.

#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)] // Complex types are clear in context

pub mod core;

pub use core::*;
