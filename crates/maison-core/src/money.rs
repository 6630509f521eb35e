//! # Money Module
//!
//! Provides the `Money` type and the active currency configuration.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price is an i64 number of cents. The UI layer is the only     │
//! │    place cents are turned into a display string, and that happens      │
//! │    through CurrencyConfig::format.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use maison_core::money::{CurrencyConfig, Money};
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//!
//! // Display formatting goes through the currency configuration
//! let usd = CurrencyConfig::default();
//! assert_eq!(usd.format(Money::from_cents(249_900)), "$2,499.00");
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
/// - **i64 (signed)**: keeps arithmetic total; the storefront domain never
///   produces negative prices, but a subtraction should not panic
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use maison_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
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
    /// use maison_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Silk Evening Gown $2,499.00
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $4,998.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `$d.cc` form.
///
/// ## Note
/// This is for debugging and logs. UI display goes through
/// [`CurrencyConfig::format`], which applies grouping and the configured
/// symbol/precision.
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
// Currency Configuration
// =============================================================================

/// The active currency configuration.
///
/// The storefront runs with a single fixed configuration (USD, `$`, two
/// decimal places, multiplier 1). The shape is kept configurable because the
/// configuration is persisted under the `app-currency` key and the UI reads
/// it back on boot.
///
/// ## Multiplier
/// `multiplier` is a display-only conversion factor applied when rendering.
/// Stored money stays integer cents in the base currency; with the default
/// configuration the multiplier is 1.0 and has no effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConfig {
    /// Currency code (ISO 4217)
    pub code: String,

    /// Currency symbol (for display)
    pub symbol: String,

    /// Number of decimal places for display
    pub decimals: u8,

    /// Display-only conversion factor from the base currency
    pub multiplier: f64,
}

impl Default for CurrencyConfig {
    /// Returns the single configuration the reference storefront runs with.
    fn default() -> Self {
        CurrencyConfig {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimals: 2,
            multiplier: 1.0,
        }
    }
}

impl CurrencyConfig {
    /// Formats a monetary amount as a display string.
    ///
    /// ## Rules
    /// - Thousands grouping on the major units (`2499` → `2,499`)
    /// - Exactly `decimals` minor digits
    /// - Negative amounts render with a leading `-` (the domain never
    ///   produces them; documented behavior, not a contract)
    ///
    /// ## Example
    /// ```rust
    /// use maison_core::money::{CurrencyConfig, Money};
    ///
    /// let usd = CurrencyConfig::default();
    /// assert_eq!(usd.format(Money::from_cents(249_900)), "$2,499.00");
    /// assert_eq!(usd.format(Money::zero()), "$0.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        // Display-only conversion; exact for the default multiplier of 1.0.
        let cents = if (self.multiplier - 1.0).abs() < f64::EPSILON {
            amount.cents()
        } else {
            (amount.cents() as f64 * self.multiplier).round() as i64
        };

        let divisor = 10_i64.pow(self.decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.symbol,
            group_thousands(whole),
            if self.decimals > 0 {
                format!(".{:0width$}", frac, width = self.decimals as usize)
            } else {
                String::new()
            }
        )
    }
}

/// Inserts `,` separators every three digits: `1234567` → `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
