//! Sample purses for demos and tests.

use coinpurse_shared::AppResult;
use coinpurse_shared::types::Currency;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::valuable::{Cash, Coin};

/// Makes one coin per value, all in `currency`, in the order given.
#[must_use]
pub fn make_coins(currency: &Currency, values: &[Decimal]) -> Vec<Cash> {
    values
        .iter()
        .map(|value| Coin::new(*value, currency.clone()).into())
        .collect()
}

/// Makes a shuffled purse of Baht, Ringgit and Rupee coins.
///
/// The purse holds 14 coins: Baht 0.25, 1, 2, 5, 10, 10; Ringgit 2, 50, 1, 5;
/// Rupee 0.5, 0.5, 10, 1. A seeded `rng` gives the same order every time.
///
/// # Errors
///
/// Never fails for the built-in labels; the `Result` comes from label validation.
pub fn make_international_coins<R: Rng + ?Sized>(rng: &mut R) -> AppResult<Vec<Cash>> {
    let mut money = Vec::new();
    money.extend(make_coins(
        &Currency::new("Baht")?,
        &[dec!(0.25), dec!(1.0), dec!(2.0), dec!(5.0), dec!(10.0), dec!(10.0)],
    ));
    money.extend(make_coins(
        &Currency::new("Ringgit")?,
        &[dec!(2.0), dec!(50.0), dec!(1.0), dec!(5.0)],
    ));
    money.extend(make_coins(
        &Currency::new("Rupee")?,
        &[dec!(0.5), dec!(0.5), dec!(10.0), dec!(1.0)],
    ));
    money.shuffle(rng);
    Ok(money)
}
