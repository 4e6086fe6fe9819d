//! Ticket Count
//!
//! How many seats a single booking asks for. The value is kept inside
//! `MIN..=MAX` at all times.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of tickets requested in one booking, always within 1..=7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketCount(u8);

impl TicketCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Clamp any integer into range
    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Exact constructor; `None` when out of range
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Apply raw text from the ticket input.
    ///
    /// An empty field resets to 1. Otherwise the leading integer is taken
    /// (trailing characters ignored) and clamped. Text with no leading
    /// integer leaves the current value untouched.
    pub fn apply_input(self, raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        raw.parse().unwrap_or(self)
    }
}

/// Text with no leading integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected a number of tickets ({min}-{max}), got {0:?}", min = TicketCount::MIN, max = TicketCount::MAX)]
pub struct InvalidTicketCount(pub String);

/// Strict parse for one-shot input: the leading integer is clamped, but
/// text without one is rejected instead of falling back to a prior value.
impl FromStr for TicketCount {
    type Err = InvalidTicketCount;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_leading_int(raw)
            .map(Self::clamped)
            .ok_or_else(|| InvalidTicketCount(raw.to_string()))
    }
}

impl Default for TicketCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for TicketCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Saturates instead of overflowing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u8) -> TicketCount {
        TicketCount::new(n).unwrap()
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(TicketCount::default().get(), 1);
    }

    #[test]
    fn test_empty_input_resets() {
        assert_eq!(count(5).apply_input(""), count(1));
    }

    #[test]
    fn test_clamps_to_range() {
        assert_eq!(count(3).apply_input("0"), count(1));
        assert_eq!(count(3).apply_input("-4"), count(1));
        assert_eq!(count(3).apply_input("12"), count(7));
        assert_eq!(count(3).apply_input("99999999999999999999999"), count(7));
        assert_eq!(count(3).apply_input("6"), count(6));
    }

    #[test]
    fn test_non_numeric_keeps_previous() {
        assert_eq!(count(4).apply_input("abc"), count(4));
        assert_eq!(count(4).apply_input("-"), count(4));
        assert_eq!(count(4).apply_input("e5"), count(4));
    }

    #[test]
    fn test_leading_integer_wins() {
        assert_eq!(count(1).apply_input("5abc"), count(5));
        assert_eq!(count(1).apply_input("2.9"), count(2));
        assert_eq!(count(1).apply_input("  3"), count(3));
    }

    #[test]
    fn test_from_str_rejects_junk() {
        assert_eq!("3".parse::<TicketCount>(), Ok(count(3)));
        assert_eq!("9 seats".parse::<TicketCount>(), Ok(count(7)));
        assert_eq!(
            "abc".parse::<TicketCount>(),
            Err(InvalidTicketCount("abc".to_string()))
        );
        assert!("".parse::<TicketCount>().is_err());
        assert!("-".parse::<TicketCount>().is_err());
    }

    #[test]
    fn test_exact_constructor() {
        assert!(TicketCount::new(0).is_none());
        assert!(TicketCount::new(8).is_none());
        assert_eq!(TicketCount::new(7).map(TicketCount::get), Some(7));
    }
}
