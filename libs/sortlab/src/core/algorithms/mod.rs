// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! The sixteen instrumented sorting algorithms.
//!
//! Every body drives its sequence exclusively through [`SortContext`]
//! primitives, which count, render, play audio and suspend after each
//! operation. Recursive formulations are expressed as explicit work stacks.

mod catalogue;
mod context;
mod exchange;
mod insertion;
mod merge;
mod network;
mod quick;
mod radix;
mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use catalogue::AlgorithmInfo;
pub use context::SortContext;

use crate::core::{Result, SortlabError};

/// Algorithm identifiers in their fixed declaration order.
///
/// The derived `Ord` follows declaration order and is used to break
/// leaderboard ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Comb,
    Cocktail,
    Gnome,
    Cycle,
    Pancake,
    Tim,
    Intro,
    Bitonic,
    Radix,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 16] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Shell,
        AlgorithmId::Comb,
        AlgorithmId::Cocktail,
        AlgorithmId::Gnome,
        AlgorithmId::Cycle,
        AlgorithmId::Pancake,
        AlgorithmId::Tim,
        AlgorithmId::Intro,
        AlgorithmId::Bitonic,
        AlgorithmId::Radix,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Shell => "shell",
            Self::Comb => "comb",
            Self::Cocktail => "cocktail",
            Self::Gnome => "gnome",
            Self::Cycle => "cycle",
            Self::Pancake => "pancake",
            Self::Tim => "tim",
            Self::Intro => "intro",
            Self::Bitonic => "bitonic",
            Self::Radix => "radix",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Equal values keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Self::Bubble
                | Self::Insertion
                | Self::Merge
                | Self::Tim
                | Self::Cocktail
                | Self::Gnome
                | Self::Radix
        )
    }

    /// Position in the fixed declaration order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Run this algorithm's body to exhaustion over the context's sequence.
    pub async fn run(self, ctx: &SortContext) -> Result<()> {
        match self {
            Self::Bubble => exchange::bubble(ctx).await,
            Self::Selection => selection::selection(ctx).await,
            Self::Insertion => insertion::insertion(ctx).await,
            Self::Merge => merge::merge_sort(ctx).await,
            Self::Quick => quick::quick(ctx).await,
            Self::Heap => selection::heap(ctx).await,
            Self::Shell => insertion::shell(ctx).await,
            Self::Comb => exchange::comb(ctx).await,
            Self::Cocktail => exchange::cocktail(ctx).await,
            Self::Gnome => exchange::gnome(ctx).await,
            Self::Cycle => selection::cycle(ctx).await,
            Self::Pancake => exchange::pancake(ctx).await,
            Self::Tim => merge::tim(ctx).await,
            Self::Intro => quick::intro(ctx).await,
            Self::Bitonic => network::bitonic(ctx).await,
            Self::Radix => radix::radix_lsd(ctx).await,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlgorithmId {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SortlabError::UnknownAlgorithm(s.to_string()))
    }
}
