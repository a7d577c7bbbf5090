// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running state of one sweep.
//!
//! Created by the extractor for a single call and dropped when the digits are
//! read, so nothing leaks from one extraction into the next.

use crate::extractor::FractionalSum;
use crate::series::Contribution;
use crate::state::{Counters, Statistics};

#[derive(Debug, Default)]
pub struct SweepState {
    sum: FractionalSum,
    largest_prime: u64,
    statistics: Statistics,
}

impl SweepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one prime's contribution into the sum, reducing modulo 1.
    pub fn fold(&mut self, contribution: &Contribution, statistics: &Statistics) {
        self.sum += contribution.fraction();
        self.largest_prime = self.largest_prime.max(contribution.prime);
        self.statistics.merge(statistics);
        self.statistics.increment_counter(Counters::PrimesSwept);
    }

    /// Record a prime the sweep passed over without accumulating.
    pub fn skip(&mut self, prime: u64) {
        self.largest_prime = self.largest_prime.max(prime);
        self.statistics.increment_counter(Counters::PrimesSkipped);
    }

    pub fn sum(&self) -> FractionalSum {
        self.sum
    }

    pub fn largest_prime(&self) -> u64 {
        self.largest_prime
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
