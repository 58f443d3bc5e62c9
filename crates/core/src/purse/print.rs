//! Console output for purses.

use std::fmt::Display;
use std::io::{self, Write};

use coinpurse_shared::AppResult;

use super::util::ValuableUtil;
use crate::valuable::Valuable;

/// Joins the display text of each item with `separator`.
pub fn join_list<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Writes the items on one line, separated by `separator`, ending with a newline.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_list<I, W>(items: I, separator: &str, out: &mut W) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
    W: Write + ?Sized,
{
    writeln!(out, "{}", join_list(items, separator))
}

/// Writes the per-currency sum report. No newline is written.
///
/// # Errors
///
/// Returns `AppError::Overflow` if a total cannot be computed, or
/// `AppError::Io` if the writer fails. Nothing is written on overflow.
pub fn print_sum_by_currency<V, W>(items: &[V], out: &mut W) -> AppResult<()>
where
    V: Valuable,
    W: Write + ?Sized,
{
    let totals = ValuableUtil::sum_by_currency(items)?;
    write!(out, "{totals}")?;
    Ok(())
}
