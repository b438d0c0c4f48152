//! Core data models for fintrack
//!
//! This module contains the data structures of the ledger: transactions,
//! categories, the running balance, user preferences, and the persisted
//! state blob that bundles them.

pub mod balance;
pub mod category;
pub mod ids;
pub mod money;
pub mod preferences;
pub mod state;
pub mod transaction;

pub use balance::Balance;
pub use category::{default_categories, Category, CategoryDraft, UNCATEGORIZED};
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use preferences::{find_currency, Currency, Preferences, Theme, CURRENCIES};
pub use state::StoreState;
pub use transaction::{Transaction, TransactionDraft, TransactionType};
