// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress and cancellation side channels for a sweep.
//!
//! Neither channel can influence the digits: observers only receive copies of
//! the sweep position, and cancellation can only abort.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Position of a running sweep, reported after each completed prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepProgress {
    /// The prime that just completed.
    pub prime: u64,
    /// Primes completed so far, including this one.
    pub completed: usize,
    /// Primes the sweep will process in total.
    pub total: usize,
}

impl SweepProgress {
    /// Completed share of the sweep in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Receives progress notifications from a sweep.
///
/// Primes may complete on worker threads and out of order, hence `Sync`.
pub trait SweepObserver: Sync {
    /// Called once, before the first prime, with the number of primes to process.
    fn on_start(&self, _total: usize) {}

    /// Called after each prime's contribution has been computed.
    fn on_prime(&self, _progress: SweepProgress) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

impl<F> SweepObserver for F
where
    F: Fn(SweepProgress) + Sync,
{
    fn on_prime(&self, progress: SweepProgress) {
        self(progress)
    }
}

/// Cooperative cancellation flag, checked by the sweep before each prime.
///
/// Clones share the same flag.
#[derive(Debug, Default, Clone)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
