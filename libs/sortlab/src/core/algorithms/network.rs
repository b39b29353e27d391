// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Bitonic sorting network.
//!
//! Uses the arbitrary-length formulation: a sort splits into a descending
//! half and an ascending half, and a merge compares across the greatest
//! power of two below its length. On power-of-two lengths this is exactly
//! the classic network.

use super::SortContext;
use crate::core::Result;

enum Frame {
    Sort { lo: usize, n: usize, ascending: bool },
    Merge { lo: usize, n: usize, ascending: bool },
}

pub(super) async fn bitonic(ctx: &SortContext) -> Result<()> {
    let mut stack = vec![Frame::Sort {
        lo: 0,
        n: ctx.len(),
        ascending: true,
    }];

    while let Some(frame) = stack.pop() {
        ctx.checkpoint().await;
        match frame {
            Frame::Sort { lo, n, ascending } => {
                if n < 2 {
                    continue;
                }
                let half = n / 2;
                stack.push(Frame::Merge { lo, n, ascending });
                stack.push(Frame::Sort {
                    lo: lo + half,
                    n: n - half,
                    ascending,
                });
                stack.push(Frame::Sort {
                    lo,
                    n: half,
                    ascending: !ascending,
                });
            }
            Frame::Merge { lo, n, ascending } => {
                if n < 2 {
                    continue;
                }
                let span = greatest_power_of_two_below(n);
                for i in lo..lo + n - span {
                    let out_of_order = if ascending {
                        ctx.greater(i, i + span).await?
                    } else {
                        ctx.less(i, i + span).await?
                    };
                    if out_of_order {
                        ctx.swap(i, i + span).await?;
                    }
                }
                stack.push(Frame::Merge {
                    lo: lo + span,
                    n: n - span,
                    ascending,
                });
                stack.push(Frame::Merge {
                    lo,
                    n: span,
                    ascending,
                });
            }
        }
    }

    ctx.mark_all_sorted();
    Ok(())
}

/// Largest power of two strictly less than `n` (`n >= 2`).
fn greatest_power_of_two_below(n: usize) -> usize {
    1 << (n - 1).ilog2()
}
