// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The digit-extraction series and its per-prime parameters.
//!
//! π is summed from Gosper's series
//!
//! ```text
//! π = Σ (25k - 3) / (binomial(3k, k) · 2^(k-1)),  k = 1, 2, ...
//! ```
//!
//! Multiplying by `10^(d-1)` and keeping only the fractional part yields the
//! digits after position `d`. The series is truncated after `N` terms, and the
//! rational terms are summed one prime power modulus at a time: for each prime
//! `a ≤ 3N`, every term is reduced modulo `a^vmax` after stripping the factors
//! of `a` that make its denominator non-invertible.
//!
//! - `factor`: phase counters that strip the active prime from series factors
//! - `accumulator`: the per-prime partial sum

pub mod accumulator;
pub mod factor;

pub use accumulator::{accumulate, Contribution, PrimePlan};
pub use factor::{strip_factors, PhaseCounter};

use crate::constants::{DIGITS_PER_TERM_BASE, PRECISION_MARGIN};
use crate::error::{DigitError, Result};

/// Series parameters shared by every prime of one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesParams {
    /// One-based series offset `d = n + 1` of the first wanted digit.
    offset: u64,
    /// Truncation length `N`.
    terms: u64,
}

impl SeriesParams {
    /// Parameters for the digit window starting at zero-based `position`.
    pub fn for_position(position: u64) -> Result<Self> {
        let offset = position.checked_add(1).ok_or_else(|| {
            DigitError::invalid_input(position.to_string(), "position is too large")
        })?;
        Ok(Self {
            offset,
            terms: truncation_length(offset),
        })
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn terms(&self) -> u64 {
        self.terms
    }

    /// Largest prime that contributes to the sum: `3N`.
    pub fn sweep_bound(&self) -> u64 {
        self.terms.saturating_mul(3)
    }

    /// Reject parameters whose moduli cannot fit under `limit`.
    ///
    /// The power of 3 needed for the sweep lies in `(N, 3N]`, so `N >= limit`
    /// is a guaranteed overflow, found here before any prime is processed.
    pub fn check_modulus_limit(&self, limit: u64) -> Result<()> {
        if self.terms < limit {
            return Ok(());
        }
        let exponent = (3 * self.terms as u128).ilog(3) as u64;
        Err(DigitError::NumericOverflow {
            prime: 3,
            exponent,
            limit,
        })
    }
}

/// Number of series terms needed for ten correct digits after `offset`.
///
/// `N = ⌈(d + 20) · ln 10 / ln 13.5⌉`; each term adds about `log10(13.5)`
/// digits and the margin of 20 digits is empirical.
pub fn truncation_length(offset: u64) -> u64 {
    let digits = offset as f64 + PRECISION_MARGIN as f64;
    (digits * std::f64::consts::LN_10 / DIGITS_PER_TERM_BASE.ln()).ceil() as u64
}

/// Exponent bound `vmax` for `prime`.
///
/// `⌊log_prime(3N)⌋` bounds the power of `prime` in any denominator. For 2 the
/// bound also absorbs the `2^(k-1)` factors and the `2^d` of the target
/// scaling, adding `N - d`; the result may then be zero or negative, in which
/// case 2 contributes nothing.
pub fn exponent_bound(prime: u64, params: &SeriesParams) -> i64 {
    let bound = params.sweep_bound().checked_ilog(prime).unwrap_or(0) as i64;
    if prime == 2 {
        bound + params.terms as i64 - params.offset as i64
    } else {
        bound
    }
}

/// Return `prime^exponent`, failing if it exceeds `limit`.
pub fn prime_power(prime: u64, exponent: u64, limit: u64) -> Result<u64> {
    let overflow = || DigitError::NumericOverflow {
        prime,
        exponent,
        limit,
    };
    let mut power: u64 = 1;
    for _ in 0..exponent {
        power = power
            .checked_mul(prime)
            .filter(|&p| p <= limit)
            .ok_or_else(overflow)?;
    }
    Ok(power)
}
