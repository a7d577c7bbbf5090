// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-point fractional accumulator.
//!
//! A [`FractionalSum`] is a value in `[0, 1)` stored as a 64-bit binary
//! fraction: bits `b` stand for `b / 2^64`. Addition wraps, which is exactly
//! reduction modulo 1, and is associative and commutative, so contributions can
//! be folded in any order (or from any thread) with a bit-identical result.
//!
//! Converting `s / av` truncates below `2^-64`. Over a sweep of `P` primes the
//! sum is low by less than `P · 2^-64`, far below the `10^-10` resolution of
//! the digit window.
//!
//! # Example
//!
//! ```
//! use pi_digits::extractor::FractionalSum;
//!
//! let half = FractionalSum::from_ratio(1, 2);
//! let quarter = FractionalSum::from_ratio(1, 4);
//! let sum = half + quarter + quarter;
//! assert_eq!(sum, FractionalSum::ZERO); // 1 mod 1
//! assert_eq!((half + quarter).leading_digits(2), 75);
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FractionalSum(u64);

impl FractionalSum {
    pub const ZERO: FractionalSum = FractionalSum(0);

    /// The fractional part of `numerator / denominator`, truncated to 64 bits.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        assert!(denominator > 0, "fraction with zero denominator");
        let numerator = (numerator % denominator) as u128;
        Self(((numerator << 64) / denominator as u128) as u64)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// `⌊self × 10^count⌋`: the first `count` decimal digits of the fraction.
    ///
    /// `count` must be at most 19 so the result fits in `u64`.
    pub fn leading_digits(self, count: u32) -> u64 {
        debug_assert!(count <= 19);
        ((self.0 as u128 * 10u128.pow(count)) >> 64) as u64
    }

    /// Nearest `f64`, for diagnostics only.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 18_446_744_073_709_551_616.0
    }
}

impl Add for FractionalSum {
    type Output = FractionalSum;

    fn add(self, rhs: FractionalSum) -> FractionalSum {
        FractionalSum(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for FractionalSum {
    fn add_assign(&mut self, rhs: FractionalSum) {
        *self = *self + rhs;
    }
}

impl Sum for FractionalSum {
    fn sum<I: Iterator<Item = FractionalSum>>(iter: I) -> FractionalSum {
        iter.fold(FractionalSum::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio_exact_binary_fractions() {
        assert_eq!(FractionalSum::from_ratio(1, 2).bits(), 1 << 63);
        assert_eq!(FractionalSum::from_ratio(3, 4).bits(), 3 << 62);
        assert_eq!(FractionalSum::from_ratio(0, 7), FractionalSum::ZERO);
    }

    #[test]
    fn test_from_ratio_reduces_modulo_one() {
        let quarter = FractionalSum::from_ratio(1, 4);
        assert_eq!(FractionalSum::from_ratio(5, 4), quarter);
    }

    #[test]
    fn test_wrapping_addition_is_mod_one() {
        let third = FractionalSum::from_ratio(2, 3);
        let sum = third + third; // 4/3 → 1/3, minus truncation
        let expected = FractionalSum::from_ratio(1, 3);
        assert!(expected.bits() - sum.bits() <= 2);
    }

    #[test]
    fn test_order_independent() {
        let parts: Vec<FractionalSum> = (1..200u64)
            .map(|d| FractionalSum::from_ratio(d * 7 % (d + 3), d + 3))
            .collect();
        let forward: FractionalSum = parts.iter().copied().sum();
        let backward: FractionalSum = parts.iter().rev().copied().sum();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_leading_digits() {
        let value = FractionalSum::from_ratio(1_415_926_535, 10_000_000_000);
        // Truncation can only lower the value; add one unit in the last place.
        let value = value + FractionalSum::from_bits(1);
        assert_eq!(value.leading_digits(10), 1_415_926_535);
        assert_eq!(FractionalSum::from_ratio(1, 8).leading_digits(3), 125);
        assert_eq!(FractionalSum::ZERO.leading_digits(10), 0);
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn test_from_ratio_zero_denominator() {
        FractionalSum::from_ratio(1, 0);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(FractionalSum::from_ratio(1, 4).to_f64(), 0.25);
    }
}
