//! # Money Module
//!
//! Provides the `Money` type for package prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As binary floating point:                                              │
//! │    499.99 is stored as 499.990000000000009094947017729282379150390625   │
//! │                                                                         │
//! │  A "max price 499.99" filter compared against a float column can       │
//! │  include or exclude the boundary row depending on rounding.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "499.99" ──parse──► 49999 cents ──bind──► INTEGER comparison         │
//! │    Exact at every step, including the boundary.                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wayfarer_core::money::Money;
//!
//! let price: Money = "499.99".parse().unwrap();
//! assert_eq!(price.cents(), 49999);
//! assert_eq!(price.to_string(), "499.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of fractional digits carried by [`Money`].
pub const MINOR_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A fixed-point monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as the SQLite INTEGER column it maps to
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as decimal text**: `"499.00"` on the wire, so JSON
///   consumers never see a float
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  --max-price 500.00 ──► PackageListingFilter.max_price ──► bound ?N     │
/// │                                                                         │
/// │  tp.price_per_person_cents ──► PackageListingRow.package_price_per_person│
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use wayfarer_core::money::Money;
    ///
    /// let price = Money::from_cents(49999);
    /// assert_eq!(price.cents(), 49999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text into cents without touching floating point.
///
/// ## Accepted Forms
/// ```text
/// "500"     → 50000
/// "500.5"   → 50050
/// "500.00"  → 50000
/// "-12.30"  → -1230
/// ".75"     → 75
/// ```
///
/// More than two fractional digits is rejected instead of rounded, so a
/// filter never silently moves its boundary.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "money".to_string(),
            reason: format!("'{}': {}", s, reason),
        };

        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a decimal number"));
        }
        if fraction.len() > MINOR_DIGITS {
            return Err(invalid("at most two decimal places are supported"));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        // Right-pad so "5" means 50 cents, not 5.
        let minor: i64 = format!("{:0<width$}", fraction, width = MINOR_DIGITS)
            .parse()
            .map_err(|_| invalid("expected a decimal number"))?;

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

/// Plain decimal rendering (`"499.00"`), no currency symbol.
///
/// The store does not carry a currency, so none is guessed here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
