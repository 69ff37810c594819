// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grammar for the `custom_interval` schedule field.
//!
//! The accepted form is exactly `<number> <unit>`: two tokens separated by a
//! single space, a non-negative decimal amount, and one of the literal units
//! `hours`, `days`, `weeks` or `months`. Every other input fails with the same
//! error so that users always see the expected grammar.

use crate::error::DomainError;
use std::str::FromStr;

/// Unit of a custom schedule interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl IntervalUnit {
    /// Converts this unit to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "hours" => Some(Self::Hours),
            "days" => Some(Self::Days),
            "weeks" => Some(Self::Weeks),
            "months" => Some(Self::Months),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed custom interval such as `3 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomInterval {
    amount: u32,
    unit: IntervalUnit,
}

impl CustomInterval {
    /// Creates a new `CustomInterval`.
    #[must_use]
    pub const fn new(amount: u32, unit: IntervalUnit) -> Self {
        Self { amount, unit }
    }

    /// Returns the number of units.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }
}

impl std::fmt::Display for CustomInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl FromStr for CustomInterval {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_custom_interval(s)
    }
}

/// Parses a `<number> <unit>` interval.
///
/// # Errors
///
/// Returns `DomainError::InvalidCustomInterval` if:
/// - The input does not split into exactly two space-separated tokens
/// - The amount is not a non-negative decimal integer that fits in 32 bits
/// - The unit is not one of `hours`, `days`, `weeks`, `months`
pub fn parse_custom_interval(text: &str) -> Result<CustomInterval, DomainError> {
    let invalid = || DomainError::InvalidCustomInterval {
        value: text.to_string(),
    };

    let tokens: Vec<&str> = text.split(' ').collect();
    let [amount, unit] = tokens.as_slice() else {
        return Err(invalid());
    };

    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let amount: u32 = amount.parse().map_err(|_| invalid())?;
    let unit: IntervalUnit = IntervalUnit::from_token(unit).ok_or_else(invalid)?;

    Ok(CustomInterval::new(amount, unit))
}
