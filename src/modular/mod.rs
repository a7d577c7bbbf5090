// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular arithmetic primitives.
//!
//! All values are `u64` residues below a modulus of at most
//! [`MAX_SUPPORTED_MODULUS`](crate::constants::MAX_SUPPORTED_MODULUS).
//! Products go through a 128-bit intermediate before reduction, so
//! `(modulus - 1)^2` never overflows.
//!
//! # Example
//!
//! ```
//! use pi_digits::modular::{inv_mod, inv_mod_odd, pow_mod};
//!
//! assert_eq!(pow_mod(2, 10, 1000), 24);
//! assert_eq!(inv_mod(3, 16).unwrap(), 11);      // 3 * 11 = 33 = 2*16 + 1
//! assert_eq!(inv_mod_odd(2, 125).unwrap(), 63); // 2 * 63 = 126
//! ```

use crate::error::{DigitError, Result};

/// Return `(a * b) mod m` without overflow.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Return `base^exponent mod modulus` by binary exponentiation.
///
/// `modulus` must be at least 1. `pow_mod(b, 0, m)` is `1 % m`.
pub fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    debug_assert!(modulus >= 1, "modulus must be positive");
    let mut result = 1 % modulus;
    let mut square = base % modulus;

    while exponent > 0 {
        if exponent & 1 != 0 {
            result = mul_mod(result, square, modulus);
        }
        exponent >>= 1;
        if exponent == 0 {
            break;
        }
        square = mul_mod(square, square, modulus);
    }

    result
}

/// Return the inverse of `x` modulo `y`, normalized into `[0, y)`.
///
/// Uses the extended Euclidean algorithm and works for any modulus. Fails with
/// [`DigitError::NonInvertible`] when `gcd(x, y) != 1`.
pub fn inv_mod(x: u64, y: u64) -> Result<u64> {
    let non_invertible = DigitError::NonInvertible {
        value: x,
        modulus: y,
    };
    if y == 0 {
        return Err(non_invertible);
    }
    if y == 1 {
        return Ok(0);
    }

    let mut u = (x % y) as i64;
    let mut v = y as i64;
    let mut c: i64 = 1;
    let mut a: i64 = 0;

    if u == 0 {
        return Err(non_invertible);
    }

    // Invariant: u ≡ c·x and v ≡ a·x (mod y).
    while u != 0 {
        let q = v / u;
        (c, a) = (a - q * c, c);
        (u, v) = (v - q * u, u);
    }

    // v now holds gcd(x, y).
    if v != 1 {
        return Err(non_invertible);
    }

    let inverse = a.rem_euclid(y as i64) as u64;
    checked_inverse(x, y, inverse)
}

/// Return the inverse of `u` modulo an odd `v`, normalized into `[0, v)`.
///
/// Binary inverse: only shifts, subtractions and parity tests, no division.
/// Fails with [`DigitError::NonInvertible`] when `v` is even or
/// `gcd(u, v) != 1`.
pub fn inv_mod_odd(u: u64, v: u64) -> Result<u64> {
    let non_invertible = DigitError::NonInvertible {
        value: u,
        modulus: v,
    };
    if v & 1 == 0 {
        return Err(non_invertible);
    }
    if v == 1 {
        return Ok(0);
    }

    let modulus = v as i64;
    let value = (u % v) as i64;
    if value == 0 {
        return Err(non_invertible);
    }

    // (u1, u3) and (v1, v3) pair a coefficient with a value it maps to; t3 is
    // their running difference and t1 its coefficient, kept in [0, v).
    let mut u1: i64 = 1;
    let mut u3: i64 = value;
    let mut v1: i64 = modulus;
    let mut v3: i64 = modulus;

    let (mut t1, mut t3, mut halve) = if value & 1 != 0 {
        (0, -modulus, false)
    } else {
        (1, value, true)
    };

    loop {
        loop {
            if halve {
                if t1 & 1 != 0 {
                    t1 += modulus;
                }
                t1 >>= 1;
                t3 >>= 1;
            }
            halve = true;
            if t3 & 1 != 0 {
                break;
            }
        }

        if t3 >= 0 {
            u1 = t1;
            u3 = t3;
        } else {
            v1 = modulus - t1;
            v3 = -t3;
        }

        t1 = u1 - v1;
        t3 = u3 - v3;
        if t1 < 0 {
            t1 += modulus;
        }
        if t3 == 0 {
            break;
        }
    }

    // u3 ends at gcd(u, v).
    if u3 != 1 {
        return Err(non_invertible);
    }

    checked_inverse(u, v, u1 as u64 % v)
}

fn checked_inverse(x: u64, modulus: u64, inverse: u64) -> Result<u64> {
    if mul_mod(x, inverse, modulus) == 1 {
        Ok(inverse)
    } else {
        Err(DigitError::NonInvertible { value: x, modulus })
    }
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
