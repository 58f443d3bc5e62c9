//! Filtering, sorting, summing and picking the maximum of a purse.

use coinpurse_shared::types::Currency;
use coinpurse_shared::{AppError, AppResult};
use tracing::{debug, trace};

use super::totals::CurrencyTotals;
use crate::valuable::Valuable;

/// Collection operations over anything `Valuable`.
///
/// Stateless; every operation works only on its arguments.
pub struct ValuableUtil;

impl ValuableUtil {
    /// Returns the items whose currency matches `currency` exactly.
    ///
    /// The result borrows from `items` and keeps their relative order.
    /// `items` itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `currency` is blank. This is distinct
    /// from a valid currency with no matches, which yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use coinpurse_core::purse::ValuableUtil;
    /// use coinpurse_core::valuable::Coin;
    /// use coinpurse_shared::types::Currency;
    /// use rust_decimal_macros::dec;
    ///
    /// let baht = Currency::new("Baht").unwrap();
    /// let ringgit = Currency::new("Ringgit").unwrap();
    /// let coins = vec![
    ///     Coin::new(dec!(1), baht.clone()),
    ///     Coin::new(dec!(20), ringgit),
    ///     Coin::new(dec!(10), baht),
    /// ];
    ///
    /// let bahts = ValuableUtil::filter_by_currency(&coins, "Baht").unwrap();
    /// assert_eq!(bahts, vec![&coins[0], &coins[2]]);
    /// assert_eq!(coins.len(), 3);
    /// ```
    pub fn filter_by_currency<'a, V: Valuable>(
        items: &'a [V],
        currency: &str,
    ) -> AppResult<Vec<&'a V>> {
        let currency = Currency::new(currency)?;
        Ok(Self::filter_by(items, &currency))
    }

    /// Same as [`ValuableUtil::filter_by_currency`] for an already valid label.
    #[must_use]
    pub fn filter_by<'a, V: Valuable>(items: &'a [V], currency: &Currency) -> Vec<&'a V> {
        let matched: Vec<&V> = items
            .iter()
            .filter(|item| item.currency() == currency)
            .collect();
        debug!(
            %currency,
            total = items.len(),
            matched = matched.len(),
            "Filtered items by currency"
        );
        matched
    }

    /// Sorts `items` in place by currency label, ascending.
    ///
    /// The sort is stable: items of the same currency keep their order.
    pub fn sort_by_currency<V: Valuable>(items: &mut [V]) {
        items.sort_by(|a, b| a.currency().cmp(b.currency()));
        debug!(count = items.len(), "Sorted items by currency");
    }

    /// Sums values per currency.
    ///
    /// Sums are exact decimals. The returned totals print as the one-line
    /// report `"<sum>-<currency> "` per currency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Overflow` if a currency's total leaves the decimal range.
    pub fn sum_by_currency<V: Valuable>(items: &[V]) -> AppResult<CurrencyTotals> {
        let mut totals = CurrencyTotals::default();
        for item in items {
            trace!(currency = %item.currency(), value = %item.value(), "Adding item");
            totals.add(item.currency(), item.value())?;
        }
        debug!(
            count = items.len(),
            currencies = totals.len(),
            "Summed items by currency"
        );
        Ok(totals)
    }

    /// Returns the greatest element by its natural ordering.
    ///
    /// Among equal maxima the last one wins.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyInput` if `items` yields nothing.
    pub fn max<T: Ord>(items: impl IntoIterator<Item = T>) -> AppResult<T> {
        items
            .into_iter()
            .max()
            .ok_or_else(|| AppError::EmptyInput("max requires at least one element".to_string()))
    }

    /// Returns the item with the greatest value, ignoring currency.
    ///
    /// Works for trait objects and other types without a natural ordering.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyInput` if `items` is empty.
    pub fn max_by_value<V: Valuable>(items: &[V]) -> AppResult<&V> {
        items
            .iter()
            .max_by(|a, b| a.value().cmp(&b.value()))
            .ok_or_else(|| {
                AppError::EmptyInput("max_by_value requires at least one element".to_string())
            })
    }
}
