//! Coins and bank notes.

use coinpurse_shared::types::{Currency, format_amount};
use rust_decimal::Decimal;

use super::Valuable;

/// Generates an immutable value object implementing `Valuable`.
///
/// Ordering is by value first, then currency label.
macro_rules! valuable_object {
    ($name:ident, $suffix:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            value: Decimal,
            currency: Currency,
        }

        impl $name {
            /// Creates a new instance with the given value and currency.
            #[must_use]
            pub const fn new(value: Decimal, currency: Currency) -> Self {
                Self { value, currency }
            }

            /// Creates a new instance in the default currency.
            #[must_use]
            pub fn with_default_currency(value: Decimal) -> Self {
                Self::new(value, Currency::default())
            }
        }

        impl Valuable for $name {
            fn value(&self) -> Decimal {
                self.value
            }

            fn currency(&self) -> &Currency {
                &self.currency
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{}{}", format_amount(self.value), self.currency, $suffix)
            }
        }
    };
}

valuable_object!(Coin, "", "A coin of fixed value and currency.");
valuable_object!(BankNote, " note", "A bank note of fixed value and currency.");
