//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: integer ten-thousandths of a dollar                  │
//! │    $0.49 = 4900 units                                               │
//! │    $0.49 + 5% tax = 4900 × 10500 / 10000 = 5145 units = $0.5145     │
//! │                                                                     │
//! │  A 5% tax on any cent-denominated price lands exactly on a unit,    │
//! │  so checkout totals carry no rounding error at all.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use market_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(159); // $1.59
//!
//! // Or parse a decimal dollar string (catalog prices arrive as "$1.59")
//! let parsed: Money = "1.59".parse().unwrap();
//! assert_eq!(price, parsed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Integer units per dollar. One unit is a hundredth of a cent.
const UNITS_PER_DOLLAR: i64 = 10_000;

/// Integer units per cent.
const UNITS_PER_CENT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in ten-thousandths of a dollar.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows the parser to see negative amounts so the
///   sign check can reject them with a dedicated error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from raw units (ten-thousandths of a dollar).
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    ///
    /// let price = Money::from_cents(159); // $1.59
    /// assert_eq!(price.units(), 15_900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * UNITS_PER_CENT)
    }

    /// Returns the value in raw units (ten-thousandths of a dollar).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / UNITS_PER_DOLLAR
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

    /// Calculates the tax amount at the given rate.
    ///
    /// ## Implementation
    /// Integer math: `(units * bps + 5000) / 10000`. The +5000 rounds to
    /// the nearest unit; cent-denominated prices at whole-percent rates
    /// divide evenly and never round at all.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::{Money, TaxRate};
    ///
    /// let price = Money::from_cents(49);      // $0.49
    /// let tax = price.tax_amount(TaxRate::from_bps(500)); // 5%
    /// assert_eq!(tax.units(), 245);           // $0.0245, exact
    /// ```
    pub fn tax_amount(&self, rate: TaxRate) -> Money {
        // i128 prevents overflow on large amounts
        let tax_units = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_units(tax_units as i64)
    }

    /// Returns this amount with tax applied on top.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::{Money, TaxRate};
    ///
    /// let price = Money::from_cents(49);               // $0.49
    /// let taxed = price.with_tax(TaxRate::from_bps(500));
    /// assert_eq!(format!("{}", taxed), "$0.5145");
    /// ```
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.tax_amount(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Whole-cent amounts print with two decimals (`$1.59`); amounts carrying
/// sub-cent precision (taxed totals) print with four (`$0.5145`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let dollars = abs / UNITS_PER_DOLLAR;
        let frac = abs % UNITS_PER_DOLLAR;
        if frac % UNITS_PER_CENT == 0 {
            write!(f, "{}${}.{:02}", sign, dollars, frac / UNITS_PER_CENT)
        } else {
            write!(f, "{}${}.{:04}", sign, dollars, frac)
        }
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Error produced when a string is not a decimal dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a decimal dollar amount")]
pub struct ParseMoneyError;

/// Parses a plain decimal dollar amount: `"1.59"`, `"11.5"`, `"3"`.
///
/// At most four fractional digits are accepted; the currency symbol is the
/// caller's concern (catalog price strings carry a leading `$` that is
/// stripped before parsing).
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }
        if frac.len() > 4 {
            return Err(ParseMoneyError);
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError)?
        };

        // "5" scales to 5000 units, "59" to 5900, "5145" to 5145
        let mut frac_units: i64 = 0;
        let mut scale = UNITS_PER_DOLLAR;
        for b in frac.bytes() {
            scale /= 10;
            frac_units += (b - b'0') as i64 * scale;
        }

        let units = whole
            .checked_mul(UNITS_PER_DOLLAR)
            .and_then(|u| u.checked_add(frac_units))
            .ok_or(ParseMoneyError)?;

        Ok(Money(if negative { -units } else { units }))
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000. 500 bps = the market's 5% sales tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
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
        let money = Money::from_cents(159);
        assert_eq!(money.units(), 15_900);
        assert_eq!(money.dollars(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(159)), "$1.59");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_units(-55_000)), "-$5.50");
        // Sub-cent precision switches to four decimals
        assert_eq!(format!("{}", Money::from_units(5145)), "$0.5145");
        assert_eq!(format!("{}", Money::from_units(10_050)), "$1.0050");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).units(), 150_000);
        let result: Money = a * 3;
        assert_eq!(result, Money::from_cents(3000));

        let mut acc = Money::zero();
        acc += b;
        acc += b;
        assert_eq!(acc, Money::from_cents(1000));
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("1.59".parse::<Money>().unwrap(), Money::from_cents(159));
        assert_eq!("11.5".parse::<Money>().unwrap(), Money::from_cents(1150));
        assert_eq!("3".parse::<Money>().unwrap(), Money::from_cents(300));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("0.5145".parse::<Money>().unwrap(), Money::from_units(5145));
        assert_eq!("-2.25".parse::<Money>().unwrap(), Money::from_units(-22_500));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("1,59".parse::<Money>().is_err());
        // More than four fractional digits cannot be represented
        assert!("0.51451".parse::<Money>().is_err());
    }

    #[test]
    fn test_tax_is_exact_for_cent_prices() {
        // $0.49 at 5% = $0.0245 tax, $0.5145 total, no rounding anywhere
        let banana = Money::from_cents(49);
        let rate = TaxRate::from_bps(500);
        assert_eq!(banana.tax_amount(rate).units(), 245);
        assert_eq!(banana.with_tax(rate).units(), 5145);
    }

    #[test]
    fn test_tax_rounds_to_nearest_unit() {
        // $0.01 at 3.33% = 0.333 units → rounds down to 0;
        // $0.03 at 3.33% = 0.999 units → rounds up to 1
        let rate = TaxRate::from_bps(333);
        assert_eq!(Money::from_cents(1).tax_amount(rate).units(), 0);
        assert_eq!(Money::from_cents(3).tax_amount(rate).units(), 1);
    }

    #[test]
    fn test_tax_rate_accessors() {
        let rate = TaxRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
        assert!(TaxRate::zero().is_zero());
        assert!(!rate.is_zero());
    }

    #[test]
    fn test_serializes_as_raw_units() {
        let json = serde_json::to_string(&Money::from_cents(49)).unwrap();
        assert_eq!(json, "4900");
    }
}
