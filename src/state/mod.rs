// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable state of a running extraction.
//!
//! - `statistics`: counters gathered per prime and merged after the sweep
//! - `sweep`: the fractional sum and its bookkeeping, owned by one extraction

pub mod statistics;
pub mod sweep;

pub use statistics::{Counters, Statistics};
pub use sweep::SweepState;
