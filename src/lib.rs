// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digits of π at an arbitrary position, with bounded integer arithmetic.
//!
//! Computes the ten digits starting at a zero-based position `n` without
//! computing any of the digits before it, using Bellard's variant of Plouffe's
//! digit-extraction method on Gosper's series
//!
//! ```text
//! π = Σ (25k - 3) / (binomial(3k, k) · 2^(k-1))
//! ```
//!
//! Running time is `O(n²)` and memory is constant.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`modular`]: modular multiply, power and the two inverses
//! - [`primes`]: primality by trial division and the prime sweep iterator
//! - [`series`]: the truncated series, factor stripping and per-prime sums
//! - [`extractor`]: plans the sweep, runs the primes and folds the sum
//! - [`state`]: the sweep's running sum and statistics
//! - [`format`]: presentation helpers for front ends
//!
//! # Precision
//!
//! Every modulus stays below a configurable limit (at most 2^58, see
//! [`constants`]), so all products fit a 128-bit intermediate. A position whose
//! moduli would exceed the limit fails with [`DigitError::NumericOverflow`]
//! instead of producing wrong digits.
//!
//! The per-prime fractions are summed in 64-bit fixed point. The sum is exact
//! up to truncation below `2^-64` per prime and does not depend on the order in
//! which the primes complete, so parallel sweeps are reproducible.
//!
//! # Example
//!
//! ```
//! let digits = pi_digits::compute_pi_digits(0).unwrap();
//! assert_eq!(digits.to_string(), "1415926535");
//!
//! let digits = pi_digits::compute_pi_digits(100).unwrap();
//! assert_eq!(digits.to_string(), "8214808651");
//! ```
//!
//! # References
//!
//! - F. Bellard (1997). "Computation of the n'th decimal digit of π with low memory."
//!   <https://bellard.org/pi/>
//! - S. Plouffe (1996). "On the computation of the n'th decimal digit of various
//!   transcendental numbers."

pub mod constants;
pub mod error;
pub mod extractor;
pub mod format;
pub mod modular;
pub mod position;
pub mod primes;
pub mod series;
pub mod state;

// Re-export commonly used types
pub use error::{DigitError, Result};
pub use extractor::{
    CancellationToken, ExtractorConfig, PiDigitExtractor, PiDigits, SweepObserver, SweepProgress,
};
pub use position::DigitPosition;

/// Compute the ten digits of π starting at zero-based `position`.
///
/// Uses the default configuration: all cores and the default modulus limit.
pub fn compute_pi_digits(position: u64) -> Result<PiDigits> {
    PiDigitExtractor::new(ExtractorConfig::default()).extract(position)
}
