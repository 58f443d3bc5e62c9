//! Property-based tests for purse operations.
//!
//! - Filter returns exactly the matching items, in order, without touching the input
//! - Sort orders by currency and is stable
//! - Sum per currency equals the arithmetic sum of that currency's items
//! - Max is never exceeded by any element

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::util::ValuableUtil;
use crate::valuable::{Coin, Valuable};
use coinpurse_shared::types::Currency;

const LABELS: [&str; 4] = ["Baht", "Ringgit", "Rupee", "baht"];

/// Strategy to generate non-negative amounts (0.00 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate one of a handful of currency labels.
fn label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LABELS.to_vec())
}

/// Strategy to generate a purse of 0-40 coins.
fn purse() -> impl Strategy<Value = Vec<Coin>> {
    prop::collection::vec(
        (amount(), label()).prop_map(|(value, label)| {
            Coin::new(value, Currency::new(label).expect("labels are non-blank"))
        }),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* purse and currency, the filtered items are exactly the
    /// matching ones in their original order, and the purse is unchanged.
    #[test]
    fn prop_filter_is_ordered_matching_subsequence(
        coins in purse(),
        wanted in label(),
    ) {
        let before = coins.clone();
        let result = ValuableUtil::filter_by_currency(&coins, wanted).unwrap();

        let expected: Vec<&Coin> = coins.iter().filter(|c| c.currency() == wanted).collect();
        prop_assert_eq!(&result, &expected);
        for item in &result {
            prop_assert!(item.currency() == wanted);
        }
        prop_assert_eq!(coins, before);
    }

    /// *For any* purse, filtering twice gives equal results.
    #[test]
    fn prop_filter_is_idempotent(coins in purse(), wanted in label()) {
        let first = ValuableUtil::filter_by_currency(&coins, wanted).unwrap();
        let second = ValuableUtil::filter_by_currency(&coins, wanted).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* purse, after sorting every adjacent pair is in currency
    /// order, and coins of one currency keep their pre-sort order.
    #[test]
    fn prop_sort_is_ordered_and_stable(coins in purse()) {
        let mut sorted = coins.clone();
        ValuableUtil::sort_by_currency(&mut sorted);

        prop_assert_eq!(sorted.len(), coins.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].currency() <= pair[1].currency());
        }
        for wanted in LABELS {
            let before: Vec<&Coin> = coins.iter().filter(|c| c.currency() == wanted).collect();
            let after: Vec<&Coin> = sorted.iter().filter(|c| c.currency() == wanted).collect();
            prop_assert_eq!(before, after);
        }
    }

    /// *For any* purse, each currency's total is the sum of its values and
    /// every currency present appears exactly once.
    #[test]
    fn prop_sum_matches_per_currency_sum(coins in purse()) {
        let totals = ValuableUtil::sum_by_currency(&coins).unwrap();

        let present: std::collections::BTreeSet<&Currency> =
            coins.iter().map(Valuable::currency).collect();
        prop_assert_eq!(totals.len(), present.len());

        for currency in present {
            let expected: Decimal = coins
                .iter()
                .filter(|c| c.currency() == currency)
                .map(Valuable::value)
                .sum();
            prop_assert_eq!(totals.get(currency), Some(expected));
        }
    }

    /// *For any* non-empty purse, no coin compares greater than the max.
    #[test]
    fn prop_max_is_not_exceeded(coins in purse().prop_filter("non-empty", |c| !c.is_empty())) {
        let max = ValuableUtil::max(coins.iter()).unwrap();
        for coin in &coins {
            prop_assert!(coin <= max);
        }
    }
}
