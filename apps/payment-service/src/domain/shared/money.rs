//! Money value object.
//!
//! Amounts are held as `Decimal` in major currency units, rounded to two
//! decimal places (midpoint away from zero) on construction.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for every amount.
pub const MONEY_SCALE: u32 = 2;

/// ISO 4217 alphabetic currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    /// Parse a three-letter currency code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` if the code is not three ASCII letters.
    pub fn parse(code: &str) -> Result<Self, MoneyError> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(MoneyError::InvalidCurrency(code.to_string()))
        }
    }

    /// Indian rupee, the service default.
    #[must_use]
    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    /// The uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative amount in a single currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a money value, rounding to [`MONEY_SCALE`] places.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` for amounts below zero.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let amount =
            amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self {
            amount: amount.normalize(),
            currency,
        })
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The amount in major units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Same currency, different amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` for amounts below zero.
    pub fn with_amount(&self, amount: Decimal) -> Result<Self, MoneyError> {
        Self::new(amount, self.currency.clone())
    }

    /// Add two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when currencies differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Self::new(self.amount + other.amount, self.currency.clone())
    }

    /// Subtract an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when currencies differ and
    /// `MoneyError::Negative` when the result would drop below zero.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Self::new(self.amount - other.amount, self.currency.clone())
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: other.currency.to_string(),
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Errors constructing or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// Amount below zero.
    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),
    /// Not a three-letter currency code.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
    /// Amounts in different currencies were combined.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand value.
        expected: String,
        /// Currency of the right-hand value.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn inr() -> Currency {
        Currency::parse("INR").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn currency_is_normalised() {
        assert_eq!(Currency::parse(" usd ").unwrap().as_str(), "USD");
        assert!(Currency::parse("US").is_err());
        assert!(Currency::parse("U$D").is_err());
    }

    #[test]
    fn rounds_to_two_places() {
        let m = Money::new(dec("10.005"), inr()).unwrap();
        assert_eq!(m.amount(), dec("10.01"));
        let m = Money::new(dec("10.004"), inr()).unwrap();
        assert_eq!(m.amount(), dec("10"));
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            Money::new(dec("-0.50"), inr()),
            Err(MoneyError::Negative(_))
        ));
        // rounds to zero, which is allowed
        assert!(Money::new(dec("-0.001"), inr()).unwrap().is_zero());
    }

    #[test]
    fn subtraction_cannot_go_negative() {
        let a = Money::new(dec("5"), inr()).unwrap();
        let b = Money::new(dec("7.25"), inr()).unwrap();
        assert_eq!(b.checked_sub(&a).unwrap().amount(), dec("2.25"));
        assert!(a.checked_sub(&b).is_err());
    }

    #[test]
    fn currencies_must_match() {
        let a = Money::new(dec("5"), inr()).unwrap();
        let b = Money::new(dec("5"), Currency::parse("USD").unwrap()).unwrap();
        assert!(matches!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }
}
