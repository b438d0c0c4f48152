//! The persisted application state
//!
//! `StoreState` is the single blob the store writes after every mutation:
//! the ledger (transactions, categories, balance) plus preferences, flattened
//! into the top level of the document.

use serde::{Deserialize, Serialize};

use super::balance::Balance;
use super::category::{default_categories, Category};
use super::preferences::Preferences;
use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Insertion order; display sorting is a read-side concern
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub balance: Balance,

    #[serde(flatten)]
    pub preferences: Preferences,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: default_categories(),
            balance: Balance::uninitialized(),
            preferences: Preferences::default(),
        }
    }
}
