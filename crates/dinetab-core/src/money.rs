//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original web client compared some amounts as raw decimals and     │
//! │  some as cent-scaled integers. A $10.00 bill tendered as 9.99 + 0.01   │
//! │  float arithmetic can land on 9.999999999999998 and mis-validate.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every comparison, sum, and subtraction happens on i64 cents.        │
//! │    Display-level decimals cross the boundary EXACTLY ONCE, via         │
//! │    `Money::from_decimal` or `Money::parse`.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dinetab_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(399);  // $14.98
//!
//! // Boundary conversion happens exactly once
//! let tendered = Money::parse("20.00").unwrap();
//! assert_eq!(tendered.cents(), 2000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// Tolerance applied when deciding whether a decimal input carries more than
/// two fractional digits (10.991 is rejected, 10.99000000001 is not).
const FRACTION_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction must be able to express a shortfall
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CatalogItem.unit_price ──► LineItem.unit_price ──► line_total          │
/// │                                                                         │
/// │  Cart total ──► Order.total ──► tender validation ──► change            │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use dinetab_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a display-level decimal amount into Money.
    ///
    /// This is THE boundary conversion: a price arriving as `10.99` from the
    /// catalog crosses into integer cents here and never touches floating
    /// point again.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidAmount`] when the input is negative,
    /// non-finite, or carries more than two fractional digits beyond
    /// rounding tolerance.
    ///
    /// ## Example
    /// ```rust
    /// use dinetab_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(10.99).unwrap().cents(), 1099);
    /// assert!(Money::from_decimal(-1.0).is_err());
    /// assert!(Money::from_decimal(10.999).is_err());
    /// assert!(Money::from_decimal(f64::NAN).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CoreError> {
        if !amount.is_finite() {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount must be a finite number, got {amount}"),
            });
        }
        if amount < 0.0 {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount must not be negative, got {amount}"),
            });
        }
        // i64 cents comfortably hold any realistic order; reject absurd input
        // before the f64 -> i64 cast can wrap.
        if amount > 1e15 {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount out of range: {amount}"),
            });
        }

        let scaled = amount * 100.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > FRACTION_TOLERANCE {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount {amount} has more than two fractional digits"),
            });
        }

        Ok(Money(rounded as i64))
    }

    /// Parses an operator-entered decimal string into Money.
    ///
    /// The admin payment keypad builds the tender amount digit by digit
    /// ("2", "20", "20.", "20.5"). The string is parsed here exactly once,
    /// in pure integer arithmetic, and compared as cents from then on.
    ///
    /// ## Accepted Forms
    /// - `"20"`    → 2000 cents
    /// - `"20.5"`  → 2050 cents
    /// - `"20.50"` → 2050 cents
    /// - `"0."`    → 0 cents (keypad intermediate state)
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidAmount`] for empty input, non-digit
    /// characters, or more than two fractional digits.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CoreError::InvalidAmount {
                reason: "amount must not be empty".to_string(),
            });
        }

        let (whole, fraction) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };

        if fraction.len() > 2 {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount '{input}' has more than two fractional digits"),
            });
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount '{input}' has no digits"),
            });
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CoreError::InvalidAmount {
                reason: format!("amount '{input}' contains non-digit characters"),
            });
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| CoreError::InvalidAmount {
                reason: format!("amount '{input}' is out of range"),
            })?
        };

        // Right-pad the fraction: "5" means 50 cents, not 5.
        let cents_part: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Money)
            .ok_or_else(|| CoreError::InvalidAmount {
                reason: format!("amount '{input}' is out of range"),
            })
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use dinetab_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(399); // $3.99
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 798); // $7.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount as a bare `"X.YY"` string for display.
    ///
    /// Round-trip law: `Money::parse(&m.display()) == m` for non-negative m.
    ///
    /// ## Example
    /// ```rust
    /// use dinetab_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1897).display(), "18.97");
    /// assert_eq!(Money::from_cents(500).display(), "5.00");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use [`Money::display`] when the bare
/// `"X.YY"` form is needed (receipts, API payloads).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
