// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Insertion-family sorts: insertion and shell.

use std::cmp::Ordering;

use super::SortContext;
use crate::core::Result;

pub(super) async fn insertion(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    insertion_range(ctx, 0, n, true).await
}

/// Insertion sort over the half-open range `[lo, hi)`.
///
/// The comparison that stops each shift loop is counted, so an already
/// sorted range costs `len - 1` comparisons and no writes. The held key is
/// written back only when it moved. With `mark`, the growing prefix is
/// marked sorted.
pub(super) async fn insertion_range(
    ctx: &SortContext,
    lo: usize,
    hi: usize,
    mark: bool,
) -> Result<()> {
    if mark {
        ctx.mark_sorted(lo);
    }
    for i in lo + 1..hi {
        ctx.checkpoint().await;
        let key = ctx.element(i)?;
        let mut j = i;
        while j > lo && ctx.compare_to(j - 1, key.value).await? == Ordering::Greater {
            ctx.shift(j - 1, j).await?;
            j -= 1;
        }
        if j != i {
            ctx.write(j, key).await?;
        }
        if mark {
            ctx.mark_range_sorted(lo..i + 1);
        }
    }
    Ok(())
}

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
pub(super) async fn shell(ctx: &SortContext) -> Result<()> {
    let n = ctx.len();
    let mut gap = n / 2;

    while gap > 0 {
        ctx.checkpoint().await;
        for i in gap..n {
            ctx.checkpoint().await;
            let temp = ctx.element(i)?;
            let mut j = i;
            while j >= gap && ctx.compare_to(j - gap, temp.value).await? == Ordering::Greater {
                ctx.shift(j - gap, j).await?;
                j -= gap;
            }
            if j != i {
                ctx.write(j, temp).await?;
            }
        }
        gap /= 2;
    }

    ctx.mark_all_sorted();
    Ok(())
}
