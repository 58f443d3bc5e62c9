//! Money type with decimal precision and currency.
//!
//! Amounts are `rust_decimal::Decimal`, never floating-point, so sums are exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Currency used when a coin or note is created without one.
pub const DEFAULT_CURRENCY: &str = "Baht";

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount.
    pub amount: Decimal,
    /// The currency label.
    pub currency: Currency,
}

/// A currency label such as "Baht" or "Ringgit".
///
/// Labels are free text, compared exactly (case-sensitive) and ordered
/// lexicographically. A label is never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_amount(self.amount), self.currency)
    }
}

impl Currency {
    /// Creates a currency label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the label is empty or whitespace.
    pub fn new(label: impl Into<String>) -> AppResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(AppError::Validation(
                "Currency label must not be blank".to_string(),
            ));
        }
        Ok(Self(label))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Formats an amount the way purse reports print it.
///
/// Trailing zeros are dropped but at least one fractional digit is kept,
/// so `11` prints as `11.0` and `20.50` as `20.5`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::default());
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, "Baht");
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(20.50), Currency::new("Ringgit").unwrap());
        assert_eq!(money.to_string(), "20.5-Ringgit");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("Baht").unwrap().as_str(), "Baht");
        assert_eq!(Currency::from_str("baht").unwrap().as_str(), "baht");
        assert_ne!(
            Currency::from_str("baht").unwrap(),
            Currency::from_str("Baht").unwrap()
        );

        assert!(Currency::from_str("").is_err());
        assert!(Currency::from_str("   ").is_err());
    }

    #[test]
    fn test_currency_ordering_is_lexicographic() {
        let baht = Currency::new("Baht").unwrap();
        let ringgit = Currency::new("Ringgit").unwrap();
        let rupee = Currency::new("Rupee").unwrap();
        assert!(baht < ringgit);
        assert!(ringgit < rupee);
        // Uppercase sorts before lowercase by code point.
        assert!(Currency::new("Zloty").unwrap() < Currency::new("baht").unwrap());
    }

    #[test]
    fn test_currency_serde_rejects_blank() {
        let parsed: Currency = serde_json::from_str("\"Baht\"").unwrap();
        assert_eq!(parsed, "Baht");
        assert!(serde_json::from_str::<Currency>("\"\"").is_err());
    }

    #[rstest]
    #[case(dec!(11), "11.0")]
    #[case(dec!(11.00), "11.0")]
    #[case(dec!(20.50), "20.5")]
    #[case(dec!(0.25), "0.25")]
    #[case(Decimal::ZERO, "0.0")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }
}
