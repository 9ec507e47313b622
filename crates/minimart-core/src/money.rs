//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  The legacy front end ran every total through JavaScript floats:    │
//! │    0.1 + 0.2 = 0.30000000000000004                                  │
//! │                                                                     │
//! │  OUR SOLUTION: Integer đồng                                         │
//! │    VND has no minor unit, so i64 đồng represents every price        │
//! │    exactly. Fractions only ever appear when a percentage is         │
//! │    applied, and are rounded half-up at that single point.           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minimart_core::money::Money;
//!
//! let price = Money::from_dong(25_000);
//! let line_total = price * 2i64;
//! assert_eq!(line_total.dong(), 50_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole đồng (the smallest VND unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate results of `subtotal - discount` may be
///   negative before the engine floors them at zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a plain JSON number, which is what
///   the backend sends and expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole đồng.
    ///
    /// ```rust
    /// use minimart_core::money::Money;
    ///
    /// let price = Money::from_dong(10_000);
    /// assert_eq!(price.dong(), 10_000);
    /// ```
    #[inline]
    pub const fn from_dong(dong: i64) -> Self {
        Money(dong)
    }

    /// Returns the value in whole đồng.
    #[inline]
    pub const fn dong(&self) -> i64 {
        self.0
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

    /// Applies a percentage rate and returns the resulting amount.
    ///
    /// Used for both tax (`taxable_base.apply_rate(tax.rate)`) and percent
    /// discounts (`subtotal.apply_rate(discount_percent)`).
    ///
    /// ## Implementation
    /// Integer math over basis points with round-half-up:
    /// `(amount * bps + 5000) / 10000`. i128 intermediates rule out overflow
    /// for any realistic order size.
    ///
    /// ```rust
    /// use minimart_core::money::Money;
    /// use minimart_core::types::Rate;
    ///
    /// let subtotal = Money::from_dong(100_000);
    /// assert_eq!(subtotal.apply_rate(Rate::from_percent(10.0)).dong(), 10_000);
    ///
    /// // 8.25% of 1.000 đ = 82,5 đ → rounds to 83 đ
    /// assert_eq!(Money::from_dong(1_000).apply_rate(Rate::from_bps(825)).dong(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(amount as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use minimart_core::money::Money;
    ///
    /// let unit_price = Money::from_dong(12_000);
    /// assert_eq!(unit_price.multiply_quantity(3).dong(), 36_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Floors the value at zero.
    ///
    /// The engine never exposes a negative taxable base, grand total or
    /// change amount; discounts larger than the subtotal saturate here.
    #[inline]
    pub const fn floor_zero(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display in the legacy receipt format: dot-grouped đồng, e.g. `25.000 đ`.
///
/// This is for debugging and the smoke tool. The view layer formats for
/// locale on its own.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{}{} đ", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dong() {
        let money = Money::from_dong(25_000);
        assert_eq!(money.dong(), 25_000);
        assert!(money.is_positive());
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_dong(25_000)), "25.000 đ");
        assert_eq!(format!("{}", Money::from_dong(1_250_500)), "1.250.500 đ");
        assert_eq!(format!("{}", Money::from_dong(500)), "500 đ");
        assert_eq!(format!("{}", Money::from_dong(0)), "0 đ");
        assert_eq!(format!("{}", Money::from_dong(-12_000)), "-12.000 đ");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dong(10_000);
        let b = Money::from_dong(4_000);

        assert_eq!((a + b).dong(), 14_000);
        assert_eq!((a - b).dong(), 6_000);
        let tripled: Money = a * 3;
        assert_eq!(tripled.dong(), 30_000);
    }

    #[test]
    fn test_apply_rate_basic() {
        // 100.000 đ at 10% = 10.000 đ
        let amount = Money::from_dong(100_000);
        assert_eq!(amount.apply_rate(Rate::from_percent(10.0)).dong(), 10_000);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 1.000 đ at 8.25% = 82,5 đ → 83 đ
        let amount = Money::from_dong(1_000);
        assert_eq!(amount.apply_rate(Rate::from_bps(825)).dong(), 83);

        // 1.001 đ at 10% = 100,1 đ → 100 đ
        assert_eq!(
            Money::from_dong(1_001).apply_rate(Rate::from_bps(1000)).dong(),
            100
        );
    }

    #[test]
    fn test_floor_zero() {
        assert_eq!(Money::from_dong(-500).floor_zero().dong(), 0);
        assert_eq!(Money::from_dong(500).floor_zero().dong(), 500);
        assert_eq!(Money::zero().floor_zero(), Money::zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = [10_000, 5_000, 2_500]
            .iter()
            .map(|&d| Money::from_dong(d))
            .sum();
        assert_eq!(total.dong(), 17_500);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_dong(-100).is_negative());
    }
}
