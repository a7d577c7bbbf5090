// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are gathered per prime by the accumulator and merged by the
//! orchestrator, so workers never share a counter.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Primes whose contribution was folded into the sum.
    PrimesSwept,
    /// Primes skipped because their exponent bound was not positive.
    PrimesSkipped,
    /// Series terms added into a partial sum.
    TermsFolded,
    /// Individual factors of the active prime removed from series terms.
    FactorsStripped,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (total, value) in self.stats.iter_mut().zip(other.stats.iter()) {
            *total += value;
        }
    }
}
