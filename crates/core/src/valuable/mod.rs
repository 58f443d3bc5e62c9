//! Things that carry a monetary value.
//!
//! - `Valuable` - the capability shared by everything a purse can hold
//! - `Coin` and `BankNote` - plain value objects
//! - `Cash` - either of the two, for mixed purses

pub mod cash;
pub mod coin;

pub use cash::Cash;
pub use coin::{BankNote, Coin};

use coinpurse_shared::types::Currency;
use rust_decimal::Decimal;

/// Anything with a monetary value and a currency.
pub trait Valuable {
    /// The monetary amount. Non-negative by convention.
    fn value(&self) -> Decimal;

    /// The currency the amount is expressed in.
    fn currency(&self) -> &Currency;
}

impl<T: Valuable + ?Sized> Valuable for &T {
    fn value(&self) -> Decimal {
        (**self).value()
    }

    fn currency(&self) -> &Currency {
        (**self).currency()
    }
}

impl<T: Valuable + ?Sized> Valuable for Box<T> {
    fn value(&self) -> Decimal {
        (**self).value()
    }

    fn currency(&self) -> &Currency {
        (**self).currency()
    }
}
