// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Removal of the active prime from series terms.
//!
//! Each of the four factors in a series term (`2k`, `2k-1`, `3(3k-1)` and
//! `3k-2`) is an arithmetic progression in `k`. A [`PhaseCounter`] follows that
//! progression modulo the active prime `a`, so divisibility by `a` is known
//! without a division. Only when the phase returns to zero is the term
//! actually divided, and every factor removed is recorded, signed, in the
//! shared exponent counter `v`.
//!
//! Keeping terms free of `a` is what keeps them invertible modulo `a^vmax`.

/// Phase of one arithmetic progression of series factors, modulo the active prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCounter {
    /// Current residue of the progression (`kq`). May start negative.
    phase: i64,
    /// Amount the progression advances per term (`kqinc`).
    step: i64,
    /// Signed contribution of each removed factor to `v` (`vinc`).
    weight: i64,
}

impl PhaseCounter {
    pub const fn new(phase: i64, step: i64, weight: i64) -> Self {
        Self {
            phase,
            step,
            weight,
        }
    }

    /// Numerator progression `2k`.
    pub const fn even_numerator() -> Self {
        Self::new(0, 2, -1)
    }

    /// Numerator progression `2k - 1`.
    pub const fn odd_numerator() -> Self {
        Self::new(-1, 2, -1)
    }

    /// Denominator progression `3(3k - 1)`.
    pub const fn triple_denominator() -> Self {
        Self::new(-3, 9, 1)
    }

    /// Denominator progression `3k - 2`.
    pub const fn linear_denominator() -> Self {
        Self::new(-2, 3, 1)
    }

    /// Advance to the next term and strip every factor of `prime` from `term`.
    ///
    /// `term` must be the next member of this counter's progression. Each
    /// factor removed adds `weight` to `exponent`. Returns the stripped term and
    /// the number of factors removed.
    pub fn strip(&mut self, term: u64, prime: u64, exponent: &mut i64) -> (u64, u32) {
        let a = prime as i64;
        self.phase += self.step;
        if self.phase < a {
            return (term, 0);
        }

        self.phase %= a;
        if self.phase != 0 {
            return (term, 0);
        }

        debug_assert!(term % prime == 0, "{} is not a multiple of {}", term, prime);
        let mut stripped = term;
        let mut removed = 0;
        loop {
            stripped /= prime;
            *exponent += self.weight;
            removed += 1;
            if stripped % prime != 0 {
                break;
            }
        }
        (stripped, removed)
    }
}

/// Divide every factor of `prime` out of `term`.
///
/// Returns the cofactor and the multiplicity of `prime` in `term`. This is
/// the direct form of what [`PhaseCounter::strip`] does incrementally.
pub fn strip_factors(mut term: u64, prime: u64) -> (u64, u32) {
    debug_assert!(prime >= 2);
    if term == 0 {
        return (0, 0);
    }
    let mut count = 0;
    while term % prime == 0 {
        term /= prime;
        count += 1;
    }
    (term, count)
}
