//! Exact decimal money type.
//!
//! Monetary values are stored as [`rust_decimal::Decimal`], never binary
//! floats, so repeated additions (a customer's running purchase total) do
//! not drift. The store trades in a single fixed currency; only the display
//! symbol is baked in here.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when constructing a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("not a decimal amount: {0:?}")]
    NotDecimal(String),
}

/// A non-negative monetary amount in the store's single currency.
///
/// ## Constraints
///
/// - Never negative
/// - Exact decimal arithmetic (no float rounding drift)
///
/// ## Examples
///
/// ```
/// use tillpoint_core::Money;
///
/// let price = Money::parse("80.00").unwrap();
/// let line_total = price.times(3);
/// assert_eq!(line_total.display(), "₹240.00");
///
/// assert!(Money::parse("-1").is_err());
/// assert!(Money::parse("eighty").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

// Deserialization routes through `new` so a hand-edited data file cannot
// smuggle in a negative amount.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

impl Money {
    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₹";

    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Money` value from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Parse a `Money` value from user input.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NotDecimal`] if the input is not a decimal
    /// number, or [`MoneyError::Negative`] if it is below zero.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| MoneyError::NotDecimal(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply a unit price by a quantity, yielding a line total.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display with the fixed currency symbol (e.g. `₹240.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", Self::SYMBOL, self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert!(Money::parse("0").is_ok());
        assert!(Money::parse("80").is_ok());
        assert!(Money::parse("80.00").is_ok());
        assert!(Money::parse(" 42.50 ").is_ok());
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Money::parse("-1"), Err(MoneyError::Negative(_))));
    }

    #[test]
    fn test_parse_not_decimal() {
        assert!(matches!(
            Money::parse("eighty"),
            Err(MoneyError::NotDecimal(_))
        ));
        assert!(matches!(Money::parse(""), Err(MoneyError::NotDecimal(_))));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(Money::parse("-0").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_times() {
        let price = Money::parse("80.00").unwrap();
        assert_eq!(price.times(3), Money::parse("240.00").unwrap());
        assert_eq!(price.times(0), Money::ZERO);
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 repeated is the classic float-drift case.
        let total: Money = (0..10).map(|_| Money::parse("0.10").unwrap()).sum();
        assert_eq!(total, Money::parse("1.00").unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::parse("240").unwrap().display(), "₹240.00");
        assert_eq!(Money::parse("7.5").unwrap().display(), "₹7.50");
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let price = Money::parse("80.00").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"80.00\"");

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let err = serde_json::from_str::<Money>("\"-5.00\"").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }
}
