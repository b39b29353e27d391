// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Partition-based sorts: quick sort and intro sort.

use super::insertion::insertion_range;
use super::selection::heap_range;
use super::SortContext;
use crate::core::Result;

/// Ranges at or below this length are finished by insertion sort.
const INTRO_INSERTION_THRESHOLD: usize = 16;

pub(super) async fn quick(ctx: &SortContext) -> Result<()> {
    let mut stack = vec![(0, ctx.len())];

    while let Some((lo, hi)) = stack.pop() {
        ctx.checkpoint().await;
        if hi.saturating_sub(lo) < 2 {
            continue;
        }
        let pivot = partition(ctx, lo, hi).await?;
        stack.push((pivot + 1, hi));
        stack.push((lo, pivot));
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Quick sort that falls back to heap sort once the partition depth reaches
/// `2 * floor(log2 n)`, and to insertion sort on short ranges.
pub(super) async fn intro(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    let depth_limit = if n > 0 { 2 * n.ilog2() } else { 0 };
    let mut stack = vec![(0, n, depth_limit)];

    while let Some((lo, hi, depth)) = stack.pop() {
        ctx.checkpoint().await;
        let len = hi.saturating_sub(lo);
        if len <= 1 {
            continue;
        }
        if len <= INTRO_INSERTION_THRESHOLD {
            insertion_range(ctx, lo, hi, false).await?;
            continue;
        }
        if depth == 0 {
            heap_range(ctx, lo, hi, false).await?;
            continue;
        }
        let pivot = partition(ctx, lo, hi).await?;
        stack.push((pivot + 1, hi, depth - 1));
        stack.push((lo, pivot, depth - 1));
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Lomuto partition of `[lo, hi)` around the last element. Returns the
/// pivot's final index, which is marked sorted.
async fn partition(ctx: &SortContext, lo: usize, hi: usize) -> Result<usize> {
    let last = hi - 1;
    let mut store = lo;
    for j in lo..last {
        if ctx.less(j, last).await? {
            ctx.swap(store, j).await?;
            store += 1;
        }
    }
    ctx.swap(store, last).await?;
    ctx.mark_sorted(store);
    Ok(store)
}
