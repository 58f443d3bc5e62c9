//! Common types used across the application.

pub mod money;

pub use money::{Currency, DEFAULT_CURRENCY, Money, format_amount};
