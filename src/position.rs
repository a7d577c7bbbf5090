// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit positions read from text or signed integers.

use std::fmt;
use std::str::FromStr;

use crate::error::{DigitError, Result};

/// A validated zero-based digit position.
///
/// ```
/// use pi_digits::DigitPosition;
///
/// let position: DigitPosition = "50".parse().unwrap();
/// assert_eq!(position.get(), 50);
/// assert!("-1".parse::<DigitPosition>().is_err());
/// assert!("fifty".parse::<DigitPosition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitPosition(u64);

impl DigitPosition {
    pub const fn new(position: u64) -> Self {
        Self(position)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for DigitPosition {
    type Error = DigitError;

    fn try_from(position: i64) -> Result<Self> {
        if position < 0 {
            return Err(negative_position(position));
        }
        Ok(Self(position as u64))
    }
}

impl FromStr for DigitPosition {
    type Err = DigitError;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DigitError::invalid_input(text, "position is empty"));
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(negative_position(text));
            }
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|err| DigitError::invalid_input(text, err.to_string()))
    }
}

fn negative_position(input: impl ToString) -> DigitError {
    DigitError::invalid_input(input.to_string(), "position must not be negative")
}

impl fmt::Display for DigitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("0".parse::<DigitPosition>().unwrap().get(), 0);
        assert_eq!(" 1000 ".parse::<DigitPosition>().unwrap().get(), 1000);
    }

    #[test]
    fn test_parse_negative() {
        match "-5".parse::<DigitPosition>() {
            Err(DigitError::InvalidInput { input, reason }) => {
                assert_eq!(input, "-5");
                assert_eq!(reason, "position must not be negative");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        for text in ["", "abc", "1.5", "12x", "-"] {
            assert!(
                matches!(
                    text.parse::<DigitPosition>(),
                    Err(DigitError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_try_from_signed() {
        let position = DigitPosition::try_from(7i64).unwrap();
        assert_eq!(position, DigitPosition::new(7));
        match DigitPosition::try_from(-1i64) {
            Err(DigitError::InvalidInput { input, .. }) => assert_eq!(input, "-1"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
