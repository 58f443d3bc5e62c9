//! Core purse logic for Coinpurse.
//!
//! This crate contains pure collection logic with no I/O beyond tracing
//! events and the print helpers that write to a caller-supplied writer.
//!
//! # Modules
//!
//! - `valuable` - The `Valuable` capability, coins, bank notes and mixed cash
//! - `purse` - Filter, sort, sum and max over collections of valuables
//! - `samples` - Sample purses for demos and tests

pub mod purse;
pub mod samples;
pub mod valuable;
