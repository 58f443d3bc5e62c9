//! Per-currency totals.

use std::collections::BTreeMap;

use coinpurse_shared::types::{Currency, Money, format_amount};
use coinpurse_shared::{AppError, AppResult};
use rust_decimal::Decimal;

/// Sum of values for each currency seen in a purse.
///
/// Iterates in ascending currency order. Displays as the one-line report
/// `"<sum>-<currency> "` repeated per currency, with no newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyTotals {
    totals: BTreeMap<Currency, Decimal>,
}

impl CurrencyTotals {
    /// Adds `value` to the running total of `currency`.
    ///
    /// On overflow the total is left as it was.
    pub(crate) fn add(&mut self, currency: &Currency, value: Decimal) -> AppResult<()> {
        let total = self.totals.entry(currency.clone()).or_insert(Decimal::ZERO);
        *total = total.checked_add(value).ok_or_else(|| {
            AppError::Overflow(format!("Total for {currency} exceeds the decimal range"))
        })?;
        Ok(())
    }

    /// Returns the total for `currency`, if any item had it.
    #[must_use]
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        self.totals.get(currency).copied()
    }

    /// Number of distinct currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no currency was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates `(currency, total)` pairs in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (&Currency, Decimal)> {
        self.totals.iter().map(|(currency, total)| (currency, *total))
    }

    /// Converts the totals into one `Money` per currency.
    #[must_use]
    pub fn into_money(self) -> Vec<Money> {
        self.totals
            .into_iter()
            .map(|(currency, amount)| Money::new(amount, currency))
            .collect()
    }
}

impl std::fmt::Display for CurrencyTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (currency, total) in &self.totals {
            write!(f, "{}-{} ", format_amount(*total), currency)?;
        }
        Ok(())
    }
}
