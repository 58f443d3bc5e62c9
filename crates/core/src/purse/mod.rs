//! Operations over a purse of valuables.
//!
//! - `ValuableUtil` - filter, sort, sum and max
//! - `CurrencyTotals` - result of summing by currency
//! - Printing helpers for lists and sum reports

pub mod print;
pub mod totals;
pub mod util;

#[cfg(test)]
mod props;

pub use print::{join_list, print_list, print_sum_by_currency};
pub use totals::CurrencyTotals;
pub use util::ValuableUtil;
