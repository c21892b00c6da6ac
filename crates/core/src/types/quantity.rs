//! Positive item quantities.
//!
//! A [`Quantity`] is always at least one. Raw shopper input never reaches the
//! cart directly: it is parsed through [`Quantity::parse_or_default`] (or the
//! stricter [`FromStr`] impl) first.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity is not a number: {0:?}")]
    NotANumber(String),
    #[error("quantity must be at least 1 (got {0})")]
    NotPositive(i64),
}

/// A positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// One unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Create a quantity from a signed request, returning `None` when the
    /// request is zero or negative. Requests above `u32::MAX` saturate.
    #[must_use]
    pub fn from_requested(value: i64) -> Option<Self> {
        if value <= 0 {
            return None;
        }
        Self::new(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Parse shopper input, falling back to one for anything that is not a
    /// positive integer.
    #[must_use]
    pub fn parse_or_default(input: &str) -> Self {
        input.parse().unwrap_or(Self::ONE)
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }

    /// One more unit.
    #[must_use]
    pub const fn increment(self) -> Self {
        self.saturating_add(Self::ONE)
    }

    /// One fewer unit, never going below one.
    #[must_use]
    pub const fn decrement(self) -> Self {
        match NonZeroU32::new(self.0.get() - 1) {
            Some(value) => Self(value),
            None => Self::ONE,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    /// Parses a leading integer the way a number input is read: surrounding
    /// whitespace is ignored and a trailing fraction is dropped (`"2.7"` is 2).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_leading_integer(s)
            .ok_or_else(|| QuantityError::NotANumber(s.to_string()))?;
        Self::from_requested(value).ok_or(QuantityError::NotPositive(value))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(QuantityError::NotPositive(0))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

/// Read the cart's numeric quantity field as a signed request.
///
/// Zero and negative values pass through so the cart can treat them as a
/// removal. Input with no leading digits reads as one.
#[must_use]
pub fn parse_requested_quantity(input: &str) -> i64 {
    parse_leading_integer(input).unwrap_or(1)
}

/// Read an optionally signed run of leading digits, ignoring anything after it.
///
/// Returns `None` when there are no digits. Values outside `i64` saturate.
pub fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..digits_end)?;
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_accepts_positive() {
        assert_eq!(Quantity::parse_or_default("4").get(), 4);
        assert_eq!(Quantity::parse_or_default(" 12 ").get(), 12);
        assert_eq!(Quantity::parse_or_default("2.7").get(), 2);
    }

    #[test]
    fn test_parse_or_default_falls_back_to_one() {
        assert_eq!(Quantity::parse_or_default(""), Quantity::ONE);
        assert_eq!(Quantity::parse_or_default("abc"), Quantity::ONE);
        assert_eq!(Quantity::parse_or_default("0"), Quantity::ONE);
        assert_eq!(Quantity::parse_or_default("-3"), Quantity::ONE);
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "x1".parse::<Quantity>(),
            Err(QuantityError::NotANumber("x1".to_string()))
        );
        assert_eq!("-2".parse::<Quantity>(), Err(QuantityError::NotPositive(-2)));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        assert_eq!(Quantity::ONE.decrement(), Quantity::ONE);
        assert_eq!(Quantity::new(3).unwrap().decrement().get(), 2);
    }

    #[test]
    fn test_saturating_add() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert_eq!(max.increment(), max);
        let two = Quantity::new(2).unwrap();
        assert_eq!(two.saturating_add(Quantity::new(3).unwrap()).get(), 5);
    }

    #[test]
    fn test_from_requested() {
        assert_eq!(Quantity::from_requested(0), None);
        assert_eq!(Quantity::from_requested(-1), None);
        assert_eq!(Quantity::from_requested(7).unwrap().get(), 7);
        assert_eq!(
            Quantity::from_requested(i64::MAX).unwrap().get(),
            u32::MAX
        );
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_integer("15abc"), Some(15));
        assert_eq!(parse_leading_integer("+8"), Some(8));
        assert_eq!(parse_leading_integer("-0"), Some(0));
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer(""), None);
    }

    #[test]
    fn test_parse_requested_quantity() {
        assert_eq!(parse_requested_quantity("0"), 0);
        assert_eq!(parse_requested_quantity("-2"), -2);
        assert_eq!(parse_requested_quantity("6"), 6);
        assert_eq!(parse_requested_quantity(""), 1);
        assert_eq!(parse_requested_quantity("lots"), 1);
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        let q: Quantity = serde_json::from_str("3").unwrap();
        assert_eq!(q.get(), 3);
    }
}
