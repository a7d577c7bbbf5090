// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time limits for the bounded integer arithmetic.
//!
//! Every modulus used by the sweep must fit the multiply-then-reduce path in
//! [`crate::modular::mul_mod`], and the signed coefficient arithmetic of the
//! modular inverses. The largest modulus the crate will ever accept is
//! [`MAX_SUPPORTED_MODULUS`]; the default limit can be narrowed at compile time
//! via cargo features.
//!
//! # Example
//!
//! ```bash
//! # Default: moduli up to 2^58
//! cargo build
//!
//! # 31-bit moduli, matching a plain `int` build
//! cargo build --features modulus_31
//! ```

/// Hard ceiling on any modulus: `2^58`.
///
/// The truncation length `N` stays below the modulus limit, so the largest raw
/// series factor `25N` fits in `u64`, and `2 * modulus` and the extended-Euclid
/// coefficients fit in `i64`.
pub const MAX_SUPPORTED_MODULUS: u64 = 1 << 58;

/// Default modulus limit used by [`crate::ExtractorConfig::default`].
///
/// This is configurable at compile time via cargo features:
/// - (default) → `2^58`
/// - `modulus_31` → `2^31 - 1`
#[cfg(not(feature = "modulus_31"))]
pub const DEFAULT_MAX_MODULUS: u64 = MAX_SUPPORTED_MODULUS;

#[cfg(feature = "modulus_31")]
pub const DEFAULT_MAX_MODULUS: u64 = (1 << 31) - 1;

/// Number of decimal digits produced per extraction.
pub const DIGITS_PER_WINDOW: u32 = 10;

/// Empirical precision margin added to the series offset when choosing the
/// truncation length.
pub const PRECISION_MARGIN: u64 = 20;

/// Each series term contributes roughly `log10(13.5)` decimal digits.
pub const DIGITS_PER_TERM_BASE: f64 = 13.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_within_supported_range() {
        assert!(DEFAULT_MAX_MODULUS <= MAX_SUPPORTED_MODULUS);
        assert!(DEFAULT_MAX_MODULUS >= (1 << 31) - 1);
    }

    #[test]
    fn test_margin_costs_eighteen_terms() {
        let terms = PRECISION_MARGIN as f64 * std::f64::consts::LN_10 / DIGITS_PER_TERM_BASE.ln();
        assert!(terms > 17.0 && terms < 18.0);
    }
}
