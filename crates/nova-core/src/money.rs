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
//! │  In a storefront that sums cart lines and markdowns:                    │
//! │    $1,099.99 × 3 lines of float math drifts by fractions of a cent     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    109999 cents × 3 = 329997 cents, exactly                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nova_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(109_900); // $1,099.00
//!
//! // Arithmetic operations
//! let pair = price * 2;                          // $2,198.00
//! let with_case = price + Money::from_cents(4_900); // $1,148.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(1099.00); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and price deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price_cents ──► CartLine totals ──► Order.subtotal/total
///          │
///          └──► Markdown badges ("-15%") against original_price_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let price = Money::from_cents(109_900); // Represents $1,099.00
    /// assert_eq!(price.cents(), 109_900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let price = Money::from_major_minor(249, 99); // $249.99
    /// assert_eq!(price.cents(), 24_999);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50 (refund)
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2_499); // $24.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 7_497); // $74.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let list = Money::from_cents(99_900);               // $999.00
    /// let sale = list.apply_percentage_discount(1500);    // 15% off
    /// assert_eq!(sale.cents(), 84_915);                   // $849.15
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 intermediate prevents overflow; +5000 rounds the half-case
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// Returns how far below `original` this price is, in basis points.
    ///
    /// Used for the "-15%" markdown badges on product cards: the sale price
    /// asks the original price how deep the cut is.
    ///
    /// ## Edge Cases
    /// - `original` not strictly greater than `self` → 0 (no markdown)
    /// - `original` zero or negative → 0 (nothing sensible to show)
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let sale = Money::from_cents(84_915);
    /// let original = Money::from_cents(99_900);
    /// assert_eq!(sale.percent_off_bps(original), 1500); // 15%
    /// ```
    pub fn percent_off_bps(&self, original: Money) -> u32 {
        if original.0 <= 0 || original.0 <= self.0 {
            return 0;
        }
        let saved = (original.0 - self.0) as i128;
        // Round to nearest basis point
        let bps = (saved * 10000 + original.0 as i128 / 2) / original.0 as i128;
        bps as u32
    }

    /// Returns the amount saved relative to `original`, floored at zero.
    ///
    /// ## Example
    /// ```rust
    /// use nova_core::money::Money;
    ///
    /// let sale = Money::from_cents(84_915);
    /// let original = Money::from_cents(99_900);
    /// assert_eq!(sale.saving_from(original).cents(), 14_985);
    /// ```
    #[inline]
    pub const fn saving_from(&self, original: Money) -> Money {
        if original.0 > self.0 {
            Money(original.0 - self.0)
        } else {
            Money(0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the demo binary. The UI shell formats prices
/// itself to handle localization properly.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(109_999);
        assert_eq!(money.cents(), 109_999);
        assert_eq!(money.dollars(), 1_099);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(249, 99);
        assert_eq!(money.cents(), 24_999);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(109_900)), "$1099.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2_499);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 7_497);
    }

    #[test]
    fn test_percentage_discount() {
        let list = Money::from_cents(99_900); // $999.00
        let sale = list.apply_percentage_discount(1500); // 15%
        assert_eq!(sale.cents(), 84_915); // $849.15
    }

    #[test]
    fn test_percent_off_round_trip() {
        let original = Money::from_cents(99_900);
        let sale = original.apply_percentage_discount(1500);
        assert_eq!(sale.percent_off_bps(original), 1500);
    }

    #[test]
    fn test_percent_off_edge_cases() {
        let price = Money::from_cents(1000);

        // No markdown when original is equal or lower
        assert_eq!(price.percent_off_bps(Money::from_cents(1000)), 0);
        assert_eq!(price.percent_off_bps(Money::from_cents(900)), 0);

        // Degenerate originals
        assert_eq!(price.percent_off_bps(Money::zero()), 0);
        assert_eq!(price.percent_off_bps(Money::from_cents(-100)), 0);
    }

    #[test]
    fn test_saving_from() {
        let sale = Money::from_cents(84_915);
        let original = Money::from_cents(99_900);
        assert_eq!(sale.saving_from(original).cents(), 14_985);

        // Floored at zero when not actually cheaper
        assert_eq!(original.saving_from(sale).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }
}
