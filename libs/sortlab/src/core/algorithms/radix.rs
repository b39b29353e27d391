// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! LSD radix sort, base 10.

use super::SortContext;
use crate::core::sequence::Element;
use crate::core::Result;

const BASE: u64 = 10;

/// How a value maps to the unsigned key whose decimal digits are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyMode {
    /// Every value is a whole number; the key is the value itself.
    Integral,
    /// The IEEE-754 bit pattern, which orders like the value for
    /// non-negative finite floats.
    Bits,
}

impl KeyMode {
    fn detect(values: &[f64]) -> Self {
        if values.iter().all(|v| v.fract() == 0.0) {
            Self::Integral
        } else {
            Self::Bits
        }
    }

    fn key(self, value: f64) -> u64 {
        match self {
            Self::Integral => value as u64,
            Self::Bits => value.to_bits(),
        }
    }
}

/// One stable counting pass per decimal digit of the largest key, least
/// significant digit first.
pub(super) async fn radix_lsd(ctx: &SortContext) -> Result<()> {
    let values = ctx.values();
    let mode = KeyMode::detect(&values);
    let max = values.iter().map(|v| mode.key(*v)).max().unwrap_or(0);

    let mut exp: u64 = 1;
    while max / exp > 0 {
        ctx.checkpoint().await;
        counting_pass(ctx, mode, exp).await?;
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }

    ctx.mark_all_sorted();
    Ok(())
}

async fn counting_pass(ctx: &SortContext, mode: KeyMode, exp: u64) -> Result<()> {
    let n = ctx.len();
    let mut count = [0usize; BASE as usize];
    let mut digits = Vec::with_capacity(n);

    for i in 0..n {
        let value = ctx.inspect(i).await?;
        let digit = ((mode.key(value) / exp) % BASE) as usize;
        count[digit] += 1;
        digits.push(digit);
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    let mut output: Vec<Element> = (0..n).map(|i| ctx.element(i)).collect::<Result<_>>()?;
    for i in (0..n).rev() {
        let digit = digits[i];
        count[digit] -= 1;
        output[count[digit]] = ctx.element(i)?;
        ctx.touch(i).await?;
    }

    for (i, element) in output.into_iter().enumerate() {
        ctx.write(i, element).await?;
    }
    Ok(())
}
