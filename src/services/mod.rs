//! Service layer for fintrack
//!
//! The service layer owns the ledger state and keeps its derived values
//! (running balance, per-category aggregates) consistent across mutations.

pub mod aggregate;
pub mod ledger;

pub use aggregate::{AggregateDrift, CategoryTotals};
pub use ledger::LedgerStore;
