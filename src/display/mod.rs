//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! Amounts go through [`AmountFormatter`] so that the currency preference
//! and the show-balance toggle apply everywhere.

pub mod amount;
pub mod category;
pub mod transaction;

pub use amount::{AmountFormatter, MASK};
pub use category::{format_category_details, format_category_list};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
