// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use proptest::prelude::*;

use pi_digits::constants::MAX_SUPPORTED_MODULUS;
use pi_digits::extractor::FractionalSum;
use pi_digits::modular::{gcd, inv_mod, inv_mod_odd, mul_mod, pow_mod};
use pi_digits::primes::is_prime;
use pi_digits::series::{strip_factors, truncation_length};

proptest! {
    #[test]
    fn prop_pow_mod_matches_repeated_multiplication(
        base in any::<u64>(),
        exponent in 0u64..64,
        modulus in 2u64..MAX_SUPPORTED_MODULUS,
    ) {
        let mut expected = 1 % modulus;
        for _ in 0..exponent {
            expected = mul_mod(expected, base % modulus, modulus);
        }
        prop_assert_eq!(pow_mod(base, exponent, modulus), expected);
    }

    #[test]
    fn prop_inv_mod_inverts_coprime_values(
        value in 1u64..MAX_SUPPORTED_MODULUS,
        modulus in 2u64..MAX_SUPPORTED_MODULUS,
    ) {
        let value = value % modulus;
        prop_assume!(gcd(value, modulus) == 1);
        let inverse = inv_mod(value, modulus).unwrap();
        prop_assert!(inverse < modulus);
        prop_assert_eq!(mul_mod(value, inverse, modulus), 1);
    }

    #[test]
    fn prop_inv_mod_rejects_shared_factors(
        value in 1u64..1 << 40,
        modulus in 2u64..1 << 40,
    ) {
        prop_assume!(gcd(value, modulus) != 1);
        prop_assert!(inv_mod(value, modulus).is_err());
    }

    #[test]
    fn prop_binary_inverse_agrees_with_euclid(
        value in any::<u64>(),
        half_modulus in 1u64..MAX_SUPPORTED_MODULUS / 2,
    ) {
        let modulus = 2 * half_modulus + 1;
        match inv_mod(value, modulus) {
            Ok(inverse) => prop_assert_eq!(inv_mod_odd(value, modulus).unwrap(), inverse),
            Err(_) => prop_assert!(inv_mod_odd(value, modulus).is_err()),
        }
    }

    #[test]
    fn prop_strip_factors_leaves_coprime_cofactor(
        term in 1u64..1 << 48,
        prime in 2u64..200,
    ) {
        prop_assume!(is_prime(prime));
        let (cofactor, count) = strip_factors(term, prime);
        prop_assert_ne!(cofactor % prime, 0);
        prop_assert_eq!(cofactor * prime.pow(count), term);
    }

    #[test]
    fn prop_fractional_sum_ignores_order(bits in prop::collection::vec(any::<u64>(), 0..64)) {
        let forward: FractionalSum = bits.iter().copied().map(FractionalSum::from_bits).sum();
        let backward: FractionalSum = bits.iter().rev().copied().map(FractionalSum::from_bits).sum();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_truncation_length_grows_with_offset(offset in 1u64..1 << 40) {
        let here = truncation_length(offset);
        let next = truncation_length(offset + 14);
        prop_assert!(here < next);
    }
}
