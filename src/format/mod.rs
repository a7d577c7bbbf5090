// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Presentation helpers for reporting a result.
//!
//! These functions are stateless and know nothing about the sweep; they take
//! finished values and render them for people.

use std::time::Duration;

use crate::constants::DIGITS_PER_WINDOW;

/// English ordinal suffix for `number`: `st`, `nd`, `rd` or `th`.
///
/// ```
/// use pi_digits::format::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
pub fn ordinal_suffix(number: u64) -> &'static str {
    if matches!(number % 100, 11..=13) {
        return "th";
    }
    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `number` followed by its ordinal suffix, e.g. `"50th"`.
pub fn ordinal(number: u64) -> String {
    format!("{}{}", number, ordinal_suffix(number))
}

/// The digit window zero-padded to its full width.
pub fn digits(window: u64) -> String {
    format!("{:0width$}", window, width = DIGITS_PER_WINDOW as usize)
}

/// Elapsed time as `m:ss.mmm`, milliseconds rounded to nearest.
pub fn elapsed(duration: Duration) -> String {
    let millis = (duration.as_micros() + 500) / 1000;
    let minutes = millis / 60_000;
    let seconds = millis / 1000 % 60;
    let millis = millis % 1000;
    format!("{}:{:02}.{:03}", minutes, seconds, millis)
}
