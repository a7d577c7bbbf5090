// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-prime partial sums.
//!
//! For one prime `a` the accumulator walks the `N` truncated series terms,
//! keeping the running numerator and denominator modulo `av = a^vmax` with all
//! factors of `a` removed and counted in the exponent `v`. A term is only
//! added once `v > 0`, and then carries the factor `a^(vmax - v)`.
//!
//! The result is the residue `s` of this prime's share of
//! `π · 10^(d-1) mod 1`, to be read as the fraction `s / av`.

use tracing::trace;

use super::factor::PhaseCounter;
use super::{exponent_bound, prime_power, SeriesParams};
use crate::error::Result;
use crate::extractor::FractionalSum;
use crate::modular::{inv_mod, inv_mod_odd, mul_mod, pow_mod};
use crate::state::{Counters, Statistics};

/// Everything needed to run one prime's pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimePlan {
    prime: u64,
    /// `vmax`
    exponent_bound: u32,
    /// `av = prime^vmax`
    modulus: u64,
}

impl PrimePlan {
    /// Plan the pass for `prime`, or `None` if the prime contributes nothing.
    ///
    /// Fails with [`NumericOverflow`](crate::DigitError::NumericOverflow) when
    /// `prime^vmax` exceeds `limit`.
    pub fn for_prime(prime: u64, params: &SeriesParams, limit: u64) -> Result<Option<Self>> {
        let vmax = exponent_bound(prime, params);
        if vmax <= 0 {
            return Ok(None);
        }
        let modulus = prime_power(prime, vmax as u64, limit)?;
        Ok(Some(Self {
            prime,
            exponent_bound: vmax as u32,
            modulus,
        }))
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn exponent_bound(&self) -> u32 {
        self.exponent_bound
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// One prime's share of the fractional sum: `residue / modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub prime: u64,
    pub modulus: u64,
    pub residue: u64,
}

impl Contribution {
    /// The contribution as a fixed-point fraction in `[0, 1)`.
    pub fn fraction(&self) -> FractionalSum {
        FractionalSum::from_ratio(self.residue, self.modulus)
    }
}

/// Run the pass planned by `plan` over all `N` series terms.
pub fn accumulate(plan: &PrimePlan, params: &SeriesParams) -> Result<(Contribution, Statistics)> {
    let a = plan.prime;
    let av = plan.modulus;
    let vmax = plan.exponent_bound as i64;
    let offset = params.offset();
    let mut stats = Statistics::new();

    // 2 divides the target scaling 10^(d-1) = 2^(d-1) · 5^(d-1) and the
    // series' 2^(k-1), so it is tracked in v rather than in num.
    let (mut num, mut v) = if a == 2 {
        (1 % av, -(offset as i64))
    } else {
        (pow_mod(2, offset, av), 0)
    };
    let mut den = 1 % av;
    let mut s = 0u64;

    let mut even = PhaseCounter::even_numerator();
    let mut odd = PhaseCounter::odd_numerator();
    let mut triple = PhaseCounter::triple_denominator();
    let mut linear = PhaseCounter::linear_denominator();

    for k in 1..=params.terms() {
        let (t, even_removed) = even.strip(2 * k, a, &mut v);
        num = mul_mod(num, t, av);

        let (t, odd_removed) = odd.strip(2 * k - 1, a, &mut v);
        num = mul_mod(num, t, av);

        let (t, triple_removed) = triple.strip(3 * (3 * k - 1), a, &mut v);
        den = mul_mod(den, t, av);

        let (mut t, linear_removed) = linear.strip(3 * k - 2, a, &mut v);
        if a != 2 {
            t *= 2;
        } else {
            v += 1;
        }
        den = mul_mod(den, t, av);

        stats.add(
            Counters::FactorsStripped,
            (even_removed + odd_removed + triple_removed + linear_removed) as u64,
        );

        if v > 0 {
            debug_assert!(v <= vmax, "exponent {} above bound {} for {}", v, vmax, a);
            let inverse = if a != 2 {
                inv_mod_odd(den, av)?
            } else {
                inv_mod(den, av)?
            };
            let mut term = mul_mod(inverse, num, av);
            for _ in v..vmax {
                term = mul_mod(term, a, av);
            }
            term = mul_mod(term, 25 * k - 3, av);
            s += term;
            if s >= av {
                s -= av;
            }
            stats.increment_counter(Counters::TermsFolded);
        }
    }

    s = mul_mod(s, pow_mod(5, offset - 1, av), av);
    trace!(prime = a, modulus = av, residue = s, "prime accumulated");

    Ok((
        Contribution {
            prime: a,
            modulus: av,
            residue: s,
        },
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SUPPORTED_MODULUS;
    use crate::primes::PrimeSweep;
    use crate::DigitError;

    fn planned(prime: u64, position: u64) -> (PrimePlan, SeriesParams) {
        let params = SeriesParams::for_position(position).unwrap();
        let plan = PrimePlan::for_prime(prime, &params, MAX_SUPPORTED_MODULUS)
            .unwrap()
            .unwrap();
        (plan, params)
    }

    #[test]
    fn test_plan_for_odd_prime() {
        // Position 0: N = 19, 3N = 57.
        let (plan, _) = planned(3, 0);
        assert_eq!(plan.exponent_bound(), 3);
        assert_eq!(plan.modulus(), 27);

        let (plan, _) = planned(53, 0);
        assert_eq!(plan.exponent_bound(), 1);
        assert_eq!(plan.modulus(), 53);
    }

    #[test]
    fn test_plan_skips_two_for_large_positions() {
        let params = SeriesParams::for_position(1000).unwrap();
        let plan = PrimePlan::for_prime(2, &params, MAX_SUPPORTED_MODULUS);
        assert_eq!(plan.unwrap(), None);
    }

    #[test]
    fn test_plan_overflow() {
        let params = SeriesParams::for_position(0).unwrap();
        match PrimePlan::for_prime(2, &params, 1 << 20) {
            Err(DigitError::NumericOverflow {
                prime,
                exponent,
                limit,
            }) => {
                assert_eq!(prime, 2);
                assert_eq!(exponent, 23);
                assert_eq!(limit, 1 << 20);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_residue_below_modulus() {
        for prime in PrimeSweep::up_to(53) {
            let (plan, params) = planned(prime, 0);
            let (contribution, stats) = accumulate(&plan, &params).unwrap();
            assert_eq!(contribution.prime, prime);
            assert_eq!(contribution.modulus, plan.modulus());
            assert!(contribution.residue < contribution.modulus);
            assert!(stats.get(Counters::TermsFolded) <= params.terms());
        }
    }

    #[test]
    fn test_accumulate_is_deterministic() {
        let (plan, params) = planned(7, 50);
        let first = accumulate(&plan, &params).unwrap();
        let second = accumulate(&plan, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_large_prime_strips_few_factors() {
        // Among k = 1..=19 only 3(3k - 1) = 3·53 at k = 18 is a multiple of 53.
        let (plan, params) = planned(53, 0);
        let (_, stats) = accumulate(&plan, &params).unwrap();
        assert_eq!(stats.get(Counters::FactorsStripped), 1);
    }
}
