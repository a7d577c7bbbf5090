// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use pi_digits::{ExtractorConfig, PiDigitExtractor, SweepObserver, SweepProgress};

/// Digit windows of π, checked against an independent high-precision source.
pub const KNOWN_DIGITS: &[(u64, &str)] = &[
    (0, "1415926535"),
    (1, "4159265358"),
    (2, "1592653589"),
    (5, "2653589793"),
    (9, "5897932384"),
    (10, "8979323846"),
    (49, "0582097494"),
    (50, "5820974944"),
    (99, "9821480865"),
    (100, "8214808651"),
    (199, "6442881097"),
    (200, "4428810975"),
    (499, "2983367336"),
    (500, "9833673362"),
    (999, "9380952572"),
    (1000, "3809525720"),
];

pub fn sequential_extractor() -> PiDigitExtractor {
    PiDigitExtractor::new(ExtractorConfig::default().sequential())
}

pub fn parallel_extractor(threads: usize) -> PiDigitExtractor {
    PiDigitExtractor::new(ExtractorConfig::default().with_threads(threads))
}

/// An observer that records every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub started: Mutex<Vec<usize>>,
    pub primes: Mutex<Vec<SweepProgress>>,
}

impl RecordingObserver {
    pub fn primes_seen(&self) -> Vec<u64> {
        let mut primes: Vec<u64> = self
            .primes
            .lock()
            .unwrap()
            .iter()
            .map(|progress| progress.prime)
            .collect();
        primes.sort_unstable();
        primes
    }
}

impl SweepObserver for RecordingObserver {
    fn on_start(&self, total: usize) {
        self.started.lock().unwrap().push(total);
    }

    fn on_prime(&self, progress: SweepProgress) {
        self.primes.lock().unwrap().push(progress);
    }
}
