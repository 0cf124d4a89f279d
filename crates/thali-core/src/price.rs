//! # Price Module
//!
//! Provides the `Price` type for thali prices.
//!
//! ## Two Ways to Show a Price
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DESCRIPTION (always two decimals)      RECEIPT (natural number form)   │
//! │                                                                         │
//! │    250      → "250.00"                    250      → "250"              │
//! │    0.125    → "0.13"  (tie, away from 0)  12.5     → "12.5"             │
//! │    1.005    → "1.00"  (really 1.00499..)  0.1+0.2  → "0.30000000000000004"
//! │                                           1e21     → "1e+21"            │
//! │                                                                         │
//! │  Prices are plain f64 numbers: menus and receipts show exactly what     │
//! │  the caller supplied, including binary rounding artefacts.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use thali_core::price::Price;
//!
//! let price = Price::from(250.0);
//! assert_eq!(price.to_fixed_2(), "250.00");
//! assert_eq!(price.to_string(), "250");
//!
//! let total: Price = [Price::from(100.0), Price::from(150.0)].into_iter().sum();
//! assert_eq!(total.to_string(), "250");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Magnitude from which the natural form switches to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which the natural form switches to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

// =============================================================================
// Price Type
// =============================================================================

/// A thali price in rupees.
///
/// ## Design Decisions
/// - **f64**: prices arrive as JSON numbers and are echoed back unchanged
/// - **Single field tuple struct**: zero-cost wrapper, serialises as a bare number
/// - **No validation**: negative prices are accepted as-is
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a rupee amount.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Price(value)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns a zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Formats with exactly two fractional digits.
    ///
    /// Rounding is decided on the exact binary value. An exact tie (only
    /// possible for values like `0.125`) rounds away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use thali_core::price::Price;
    ///
    /// assert_eq!(Price::new(250.0).to_fixed_2(), "250.00");
    /// assert_eq!(Price::new(0.125).to_fixed_2(), "0.13");
    /// assert_eq!(Price::new(99.999).to_fixed_2(), "100.00");
    /// ```
    pub fn to_fixed_2(&self) -> String {
        let value = self.0;

        if !value.is_finite() || value.abs() >= EXPONENT_UPPER {
            return self.to_string();
        }

        if value == 0.0 {
            // Covers -0.0
            return "0.00".to_string();
        }

        // An exact binary tie at two decimals is an odd multiple of 1/200,
        // which is representable only as a multiple of 1/8.
        let scaled = value * 100.0;
        if (value * 8.0).fract() == 0.0 && (scaled - scaled.trunc()).abs() == 0.5 {
            let rounded = (scaled.trunc() + scaled.signum()) / 100.0;
            return format!("{:.2}", rounded);
        }

        format!("{:.2}", value)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Natural number form, as a JavaScript engine would print the value.
///
/// Shortest round-trip digits; exponent notation with an explicit sign for
/// magnitudes of at least `1e21` or below `1e-6`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
            let exp = format!("{:e}", value);
            return match exp.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => f.write_str(&exp),
            };
        }

        write!(f, "{}", value)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl From<f64> for Price {
    #[inline]
    fn from(value: f64) -> Self {
        Price(value)
    }
}

impl From<Price> for f64 {
    #[inline]
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Left-to-right sum starting at zero.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, price| acc + price)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
