// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The prime sweep that turns a digit position into ten digits of π.
//!
//! # Architecture
//!
//! An extraction runs in three steps:
//!
//! 1. **Plan**: derive the series parameters from the position, walk the
//!    primes up to `3N` and compute each prime's modulus. Overflow of any
//!    modulus is detected here, before the expensive work starts.
//! 2. **Accumulate**: run every planned prime's pass. Passes are independent
//!    and run on the rayon pool unless the configuration asks for a
//!    sequential sweep.
//! 3. **Fold**: add each contribution into a [`FractionalSum`] and read the
//!    first ten decimal digits.
//!
//! The fold is exact and order-independent, so parallel and sequential sweeps
//! produce the same digits bit for bit.
//!
//! # Example
//!
//! ```
//! use pi_digits::{ExtractorConfig, PiDigitExtractor};
//!
//! let extractor = PiDigitExtractor::new(ExtractorConfig::default());
//! let digits = extractor.extract(0).unwrap();
//! assert_eq!(digits.to_string(), "1415926535");
//! ```

pub mod fraction;
pub mod observer;

pub use fraction::FractionalSum;
pub use observer::{CancellationToken, NoopObserver, SweepObserver, SweepProgress};

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_MAX_MODULUS, DIGITS_PER_WINDOW, MAX_SUPPORTED_MODULUS};
use crate::error::{DigitError, Result};
use crate::format;
use crate::primes::PrimeSweep;
use crate::series::{accumulate, Contribution, PrimePlan, SeriesParams};
use crate::state::{Statistics, SweepState};

/// Runtime configuration of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Largest modulus any prime power may reach.
    pub max_modulus: u64,
    /// Worker threads for the sweep; `None` uses the global rayon pool.
    pub threads: Option<usize>,
    /// Run prime passes on worker threads.
    pub parallel: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_modulus: DEFAULT_MAX_MODULUS,
            threads: None,
            parallel: true,
        }
    }
}

impl ExtractorConfig {
    pub fn with_max_modulus(mut self, max_modulus: u64) -> Self {
        self.max_modulus = max_modulus;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Run every prime pass on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn runs_in_parallel(&self) -> bool {
        self.parallel && self.threads != Some(1)
    }

    /// Check the configuration before any work is done.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SUPPORTED_MODULUS).contains(&self.max_modulus) {
            return Err(DigitError::InvalidConfig {
                reason: format!(
                    "modulus limit {} is outside [2, {}]",
                    self.max_modulus, MAX_SUPPORTED_MODULUS
                ),
            });
        }
        if self.threads == Some(0) {
            return Err(DigitError::InvalidConfig {
                reason: "thread count must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Ten digits of π and how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiDigits {
    /// Zero-based position of the first digit.
    pub position: u64,
    /// The digits as an integer below `10^10`; leading zeros are significant.
    pub digits: u64,
    /// Largest prime the sweep processed: the last prime `<= 3N`.
    ///
    /// `pidigits.c` prints the first prime above `3N` here instead, so its
    /// "Largest prime computed" line reads 59 where this reads 53 at position 0.
    pub largest_prime: u64,
    pub statistics: Statistics,
}

impl fmt::Display for PiDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::digits(self.digits))
    }
}

/// The primes of one extraction, ready to accumulate.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub params: SeriesParams,
    pub plans: Vec<PrimePlan>,
    /// Primes `<= 3N` with a non-positive exponent bound.
    pub skipped: Vec<u64>,
}

/// Computes digit windows of π.
///
/// The extractor holds only configuration; every call to [`extract`] builds
/// its own sweep state.
///
/// [`extract`]: PiDigitExtractor::extract
#[derive(Debug, Clone, Default)]
pub struct PiDigitExtractor {
    config: ExtractorConfig,
    cancellation: CancellationToken,
}

impl PiDigitExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            cancellation: CancellationToken::new(),
        }
    }

    /// Use `token` to cancel sweeps started by this extractor.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Compute the ten digits starting at zero-based `position`.
    pub fn extract(&self, position: u64) -> Result<PiDigits> {
        self.extract_with(position, &NoopObserver)
    }

    /// Compute the ten digits starting at `position`, reporting progress to `observer`.
    pub fn extract_with(&self, position: u64, observer: &dyn SweepObserver) -> Result<PiDigits> {
        let sweep = self.plan(position)?;
        let params = sweep.params;
        let total = sweep.plans.len();

        info!(
            position,
            terms = params.terms(),
            primes = total,
            parallel = self.config.runs_in_parallel(),
            "sweeping primes"
        );
        observer.on_start(total);

        let completed = AtomicUsize::new(0);
        let run_prime = |plan: &PrimePlan| -> Result<(Contribution, Statistics)> {
            if self.cancellation.is_cancelled() {
                return Err(DigitError::Cancelled {
                    completed: completed.load(Ordering::Relaxed),
                    total,
                });
            }
            let result = accumulate(plan, &params)?;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            observer.on_prime(SweepProgress {
                prime: plan.prime(),
                completed: done,
                total,
            });
            Ok(result)
        };

        let results = if self.config.runs_in_parallel() {
            let run_all = || {
                sweep
                    .plans
                    .par_iter()
                    .map(&run_prime)
                    .collect::<Result<Vec<_>>>()
            };
            match self.config.threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?
                    .install(run_all),
                None => run_all(),
            }
        } else {
            sweep
                .plans
                .iter()
                .map(&run_prime)
                .collect::<Result<Vec<_>>>()
        };

        let results = results.inspect_err(|err| {
            if let DigitError::Cancelled { completed, total } = err {
                warn!(position, completed, total, "sweep cancelled");
            }
        })?;

        let mut state = SweepState::new();
        for &prime in &sweep.skipped {
            state.skip(prime);
        }
        for (contribution, statistics) in &results {
            state.fold(contribution, statistics);
        }

        debug!(fraction = state.sum().to_f64(), "fractional sum folded");
        let digits = PiDigits {
            position,
            digits: state.sum().leading_digits(DIGITS_PER_WINDOW),
            largest_prime: state.largest_prime(),
            statistics: *state.statistics(),
        };
        info!(
            position,
            digits = %digits,
            largest_prime = digits.largest_prime,
            "sweep complete"
        );
        Ok(digits)
    }

    /// Plan the sweep for `position` without accumulating anything.
    ///
    /// Fails with [`DigitError::NumericOverflow`] as soon as a prime power
    /// would exceed the configured modulus limit.
    pub fn plan(&self, position: u64) -> Result<SweepPlan> {
        self.config.validate()?;
        let params = SeriesParams::for_position(position)?;
        params.check_modulus_limit(self.config.max_modulus)?;

        let mut plans = Vec::new();
        let mut skipped = Vec::new();
        for prime in PrimeSweep::up_to(params.sweep_bound()) {
            match PrimePlan::for_prime(prime, &params, self.config.max_modulus)? {
                Some(plan) => {
                    debug!(
                        prime,
                        exponent_bound = plan.exponent_bound(),
                        modulus = plan.modulus(),
                        "planned prime"
                    );
                    plans.push(plan);
                }
                None => {
                    debug!(prime, "prime contributes nothing");
                    skipped.push(prime);
                }
            }
        }

        Ok(SweepPlan {
            params,
            plans,
            skipped,
        })
    }
}
