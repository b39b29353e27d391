// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Merge-based sorts: top-down merge sort and tim sort.

use std::cmp::Ordering;

use super::insertion::insertion_range;
use super::SortContext;
use crate::core::sequence::Element;
use crate::core::Result;

/// Tim sort run length.
const RUN: usize = 32;

enum Frame {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Top-down merge sort, visited in recursive order from an explicit stack.
pub(super) async fn merge_sort(ctx: &SortContext) -> Result<()> {
    let mut stack = vec![Frame::Sort { lo: 0, hi: ctx.len() }];

    while let Some(frame) = stack.pop() {
        ctx.checkpoint().await;
        match frame {
            Frame::Sort { lo, hi } => {
                if hi - lo < 2 {
                    continue;
                }
                let mid = lo + (hi - lo + 1) / 2;
                stack.push(Frame::Merge { lo, mid, hi });
                stack.push(Frame::Sort { lo: mid, hi });
                stack.push(Frame::Sort { lo, hi: mid });
            }
            Frame::Merge { lo, mid, hi } => merge(ctx, lo, mid, hi).await?,
        }
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Sorted runs of [`RUN`] elements by insertion, then bottom-up merges of
/// doubling width.
pub(super) async fn tim(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();

    for start in (0..n).step_by(RUN) {
        ctx.checkpoint().await;
        insertion_range(ctx, start, (start + RUN).min(n), false).await?;
    }

    let mut size = RUN;
    while size < n {
        for start in (0..n).step_by(size * 2) {
            ctx.checkpoint().await;
            let mid = start + size;
            let end = (start + size * 2).min(n);
            if mid < end {
                merge(ctx, start, mid, end).await?;
            }
        }
        size *= 2;
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Merge the sorted runs `[lo, mid)` and `[mid, hi)` through temporary
/// buffers. Ties take from the left run.
async fn merge(ctx: &SortContext, lo: usize, mid: usize, hi: usize) -> Result<()> {
    let left = copy_range(ctx, lo, mid)?;
    let right = copy_range(ctx, mid, hi)?;
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        let ordering = ctx
            .compare_values(left[i].value, right[j].value, k)
            .await?;
        if ordering != Ordering::Greater {
            ctx.write(k, left[i]).await?;
            i += 1;
        } else {
            ctx.write(k, right[j]).await?;
            j += 1;
        }
        k += 1;
    }
    for element in left[i..].iter().chain(&right[j..]) {
        ctx.write(k, *element).await?;
        k += 1;
    }

    ctx.mark_range_sorted(lo..hi);
    Ok(())
}

fn copy_range(ctx: &SortContext, lo: usize, hi: usize) -> Result<Vec<Element>> {
    (lo..hi).map(|i| ctx.element(i)).collect()
}
