//! Mixed coins and notes.

use std::cmp::Ordering;

use coinpurse_shared::types::Currency;
use rust_decimal::Decimal;

use super::{BankNote, Coin, Valuable};

/// A coin or a bank note.
///
/// Ordered by value, then currency; a coin sorts before a note of the same
/// value and currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cash {
    /// A coin.
    Coin(Coin),
    /// A bank note.
    BankNote(BankNote),
}

impl Cash {
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Coin(_) => 0,
            Self::BankNote(_) => 1,
        }
    }
}

impl Valuable for Cash {
    fn value(&self) -> Decimal {
        match self {
            Self::Coin(coin) => coin.value(),
            Self::BankNote(note) => note.value(),
        }
    }

    fn currency(&self) -> &Currency {
        match self {
            Self::Coin(coin) => coin.currency(),
            Self::BankNote(note) => note.currency(),
        }
    }
}

impl Ord for Cash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then_with(|| self.currency().cmp(other.currency()))
            .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
    }
}

impl PartialOrd for Cash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Coin> for Cash {
    fn from(coin: Coin) -> Self {
        Self::Coin(coin)
    }
}

impl From<BankNote> for Cash {
    fn from(note: BankNote) -> Self {
        Self::BankNote(note)
    }
}

impl std::fmt::Display for Cash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin(coin) => std::fmt::Display::fmt(coin, f),
            Self::BankNote(note) => std::fmt::Display::fmt(note, f),
        }
    }
}
