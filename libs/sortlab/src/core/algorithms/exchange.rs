// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Adjacent- and gapped-exchange sorts: bubble, comb, cocktail, gnome, pancake.

use std::cmp::Ordering;

use super::SortContext;
use crate::core::Result;

const COMB_SHRINK: f64 = 1.3;

/// Plain nested-loop bubble sort with no early exit.
pub(super) async fn bubble(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    for i in 0..n.saturating_sub(1) {
        ctx.checkpoint().await;
        for j in 0..n - i - 1 {
            if ctx.greater(j, j + 1).await? {
                ctx.swap(j, j + 1).await?;
            }
        }
        ctx.mark_sorted(n - i - 1);
    }
    ctx.mark_sorted(0);
    Ok(())
}

pub(super) async fn comb(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    let mut gap = n;
    let mut sorted = false;

    while !sorted {
        ctx.checkpoint().await;
        gap = (gap as f64 / COMB_SHRINK) as usize;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }
        let mut i = 0;
        while i + gap < n {
            if ctx.greater(i, i + gap).await? {
                ctx.swap(i, i + gap).await?;
                sorted = false;
            }
            i += 1;
        }
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Bidirectional bubble sort, shrinking both ends after each pass.
pub(super) async fn cocktail(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    if n < 2 {
        ctx.mark_all_sorted();
        return Ok(());
    }

    let mut start = 0;
    let mut end = n - 1;
    let mut swapped = true;

    while swapped {
        ctx.checkpoint().await;
        swapped = false;

        for i in start..end {
            if ctx.greater(i, i + 1).await? {
                ctx.swap(i, i + 1).await?;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        swapped = false;
        ctx.mark_sorted(end);
        end -= 1;

        for i in (start..end).rev() {
            if ctx.greater(i, i + 1).await? {
                ctx.swap(i, i + 1).await?;
                swapped = true;
            }
        }
        ctx.mark_sorted(start);
        start += 1;
    }

    ctx.mark_all_sorted();
    Ok(())
}

pub(super) async fn gnome(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    let mut index = 1;

    while index < n {
        ctx.checkpoint().await;
        if ctx.compare(index, index - 1).await? != Ordering::Less {
            index += 1;
        } else {
            ctx.swap(index, index - 1).await?;
            index = (index - 1).max(1);
        }
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Repeatedly flip the largest unsorted element to the front, then to the
/// end of the unsorted prefix.
pub(super) async fn pancake(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();

    for size in (2..=n).rev() {
        ctx.checkpoint().await;
        let mut max_index = 0;
        for i in 1..size {
            if ctx.greater(i, max_index).await? {
                max_index = i;
            }
        }
        if max_index != size - 1 {
            flip(ctx, max_index).await?;
            flip(ctx, size - 1).await?;
        }
        ctx.mark_sorted(size - 1);
    }

    ctx.mark_sorted(0);
    Ok(())
}

/// Reverse the prefix `[0, k]`.
async fn flip(ctx: &SortContext, mut k: usize) -> Result<()> {
    let mut start = 0;
    while start < k {
        ctx.swap(start, k).await?;
        start += 1;
        k -= 1;
    }
    Ok(())
}
