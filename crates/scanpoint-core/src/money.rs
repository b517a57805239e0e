//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A price of 12.50 is stored as 1250 (i64).                            │
//! │    Only the serialization edge renders it as "12.50".                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scanpoint_core::money::Money;
//!
//! // Create from cents (the only constructor from raw numbers)
//! let price = Money::from_cents(1250);
//!
//! // Render for the API / dashboard
//! assert_eq!(price.format_amount(), "12.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the BIGINT column it round-trips through
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde as a bare number**: serializes to/from the raw cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use scanpoint_core::money::Money;
    ///
    /// let price = Money::from_cents(1250);
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. 12 for 12.50).
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion, always 0-99 (e.g. 50 for 12.50).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Renders the value as a decimal string with two fraction digits.
    ///
    /// This is the wire format for the `price` field in API responses and
    /// the dashboard. The currency symbol is a presentation concern and is
    /// deliberately not part of this type.
    ///
    /// ## Example
    /// ```rust
    /// use scanpoint_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1250).format_amount(), "12.50");
    /// assert_eq!(Money::from_cents(5).format_amount(), "0.05");
    /// assert_eq!(Money::from_cents(-550).format_amount(), "-5.50");
    /// ```
    pub fn format_amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major_units().abs(), self.minor_units())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the same decimal form as [`Money::format_amount`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_amount())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.major_units(), 12);
        assert_eq!(money.minor_units(), 50);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Money::from_cents(1250).format_amount(), "12.50");
        assert_eq!(Money::from_cents(500).format_amount(), "5.00");
        assert_eq!(Money::from_cents(5).format_amount(), "0.05");
        assert_eq!(Money::from_cents(0).format_amount(), "0.00");
        assert_eq!(Money::from_cents(-550).format_amount(), "-5.50");
    }

    #[test]
    fn test_display_matches_format_amount() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(100) < Money::from_cents(250));
    }

    #[test]
    fn test_serde_as_bare_number() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "1250");

        let back: Money = serde_json::from_str("1250").unwrap();
        assert_eq!(back, Money::from_cents(1250));
    }
}
