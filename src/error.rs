// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for digit extraction.

use thiserror::Error;

/// Errors that can abort a digit extraction.
///
/// Every variant is fatal for the requested position: the sweep is
/// deterministic, so retrying with the same input cannot succeed.
#[derive(Debug, Error)]
pub enum DigitError {
    /// The requested position is negative, non-numeric, or otherwise unusable.
    #[error("invalid digit position {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// A prime power (or series factor) does not fit under the modulus limit.
    #[error("{prime}^{exponent} exceeds the modulus limit {limit}")]
    NumericOverflow {
        prime: u64,
        exponent: u64,
        limit: u64,
    },

    /// A modular inverse was requested for a value sharing a factor with the modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NonInvertible { value: u64, modulus: u64 },

    /// The sweep was cancelled between two primes.
    #[error("cancelled after {completed} of {total} primes")]
    Cancelled { completed: usize, total: usize },

    /// The extractor configuration is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl DigitError {
    pub(crate) fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        DigitError::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DigitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_prime_power() {
        let err = DigitError::NumericOverflow {
            prime: 3,
            exponent: 40,
            limit: 1 << 58,
        };
        assert_eq!(
            err.to_string(),
            "3^40 exceeds the modulus limit 288230376151711744"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = DigitError::invalid_input("-4", "position must not be negative");
        assert_eq!(
            err.to_string(),
            "invalid digit position \"-4\": position must not be negative"
        );
    }
}
