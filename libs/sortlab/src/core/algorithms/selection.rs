// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Selection-family sorts: selection, heap and cycle.

use std::cmp::Ordering;

use super::SortContext;
use crate::core::Result;

pub(super) async fn selection(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    for i in 0..n.saturating_sub(1) {
        ctx.checkpoint().await;
        let mut min_index = i;
        for j in i + 1..n {
            if ctx.less(j, min_index).await? {
                min_index = j;
            }
        }
        if min_index != i {
            ctx.swap(i, min_index).await?;
        }
        ctx.mark_sorted(i);
    }
    ctx.mark_sorted(n.saturating_sub(1));
    Ok(())
}

pub(super) async fn heap(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    heap_range(ctx, 0, n, true).await?;
    ctx.mark_sorted(0);
    Ok(())
}

/// Heap sort over the half-open range `[lo, hi)`. With `mark`, each slot is
/// marked sorted as the maximum is moved into it.
pub(super) async fn heap_range(ctx: &SortContext, lo: usize, hi: usize, mark: bool) -> Result<()> {
    let n = hi.saturating_sub(lo);

    for i in (0..n / 2).rev() {
        ctx.checkpoint().await;
        sift_down(ctx, lo, n, i).await?;
    }

    for end in (1..n).rev() {
        ctx.checkpoint().await;
        ctx.swap(lo, lo + end).await?;
        if mark {
            ctx.mark_sorted(lo + end);
        }
        sift_down(ctx, lo, end, 0).await?;
    }
    Ok(())
}

/// Restore the max-heap property below `root` within a heap of `n` slots
/// starting at `base`.
async fn sift_down(ctx: &SortContext, base: usize, n: usize, mut root: usize) -> Result<()> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < n && ctx.greater(base + left, base + largest).await? {
            largest = left;
        }
        if right < n && ctx.greater(base + right, base + largest).await? {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        ctx.swap(base + root, base + largest).await?;
        root = largest;
    }
}

/// Cycle sort: writes each element directly to its final slot.
///
/// Duplicate-skip probes and rotations are both bounded by the sequence
/// length; exceeding either is reported as a fault.
pub(super) async fn cycle(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();

    for start in 0..n.saturating_sub(1) {
        ctx.checkpoint().await;
        let mut item = ctx.element(start)?;

        let mut pos = final_position(ctx, start, item.value).await?;
        if pos == start {
            ctx.mark_sorted(start);
            continue;
        }
        pos = skip_duplicates(ctx, pos, item.value).await?;
        item = ctx.exchange(pos, item).await?;

        let mut rotations = 0;
        while pos != start {
            ctx.checkpoint().await;
            rotations += 1;
            if rotations > n {
                return Err(ctx.fault(format!(
                    "cycle starting at {} did not close within {} rotations",
                    start, n
                )));
            }
            pos = final_position(ctx, start, item.value).await?;
            pos = skip_duplicates(ctx, pos, item.value).await?;
            item = ctx.exchange(pos, item).await?;
        }
        ctx.mark_sorted(start);
    }

    ctx.mark_sorted(n.saturating_sub(1));
    Ok(())
}

/// `start` plus the number of later elements strictly less than `value`.
async fn final_position(ctx: &SortContext, start: usize, value: f64) -> Result<usize> {
    let mut pos = start;
    for i in start + 1..ctx.len() {
        if ctx.compare_to(i, value).await? == Ordering::Less {
            pos += 1;
        }
    }
    Ok(pos)
}

async fn skip_duplicates(ctx: &SortContext, mut pos: usize, value: f64) -> Result<usize> {
    let n = ctx.len();
    while pos < n && ctx.compare_to(pos, value).await? == Ordering::Equal {
        pos += 1;
    }
    if pos >= n {
        return Err(ctx.fault(format!(
            "duplicate probe for {} ran past the end of the sequence",
            value
        )));
    }
    Ok(pos)
}
