// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime enumeration for the outer sweep.
//!
//! The sweep only ever needs primes up to `3N`, a few thousand for positions in
//! the low thousands, so trial division is fast enough and needs no table.
//!
//! # Examples
//!
//! ```
//! use pi_digits::primes::{is_prime, next_prime, PrimeSweep};
//!
//! assert!(is_prime(97));
//! assert_eq!(next_prime(97), 101);
//!
//! let primes: Vec<u64> = PrimeSweep::up_to(20).collect();
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! ```

/// Return true if `m` is prime.
///
/// Even numbers other than 2 are rejected before any trial division.
pub fn is_prime(m: u64) -> bool {
    if m < 2 {
        return false;
    }
    if m % 2 == 0 {
        return m == 2;
    }

    let mut divisor = 3;
    while divisor <= m / divisor {
        if m % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Return the smallest prime strictly greater than `m`.
pub fn next_prime(mut m: u64) -> u64 {
    loop {
        m += 1;
        if is_prime(m) {
            return m;
        }
    }
}

/// Iterator over the primes `2, 3, 5, ...` not exceeding a bound.
#[derive(Debug, Clone)]
pub struct PrimeSweep {
    next: Option<u64>,
    bound: u64,
}

impl PrimeSweep {
    /// Create a sweep over all primes `<= bound`.
    pub fn up_to(bound: u64) -> Self {
        Self {
            next: (bound >= 2).then_some(2),
            bound,
        }
    }
}

impl Iterator for PrimeSweep {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let prime = self.next?;
        self.next = if prime < self.bound {
            Some(next_prime(prime)).filter(|&p| p <= self.bound)
        } else {
            None
        };
        Some(prime)
    }
}

impl std::iter::FusedIterator for PrimeSweep {}
