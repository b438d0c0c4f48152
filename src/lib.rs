//! fintrack - personal income and expense tracker
//!
//! This library provides the core of the fintrack ledger: transactions
//! assigned to categories, a running balance, and per-category totals that
//! stay consistent as transactions are added, edited and deleted. Every
//! change is saved before it becomes visible.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and application settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, balance, preferences)
//! - `storage`: Persistence capability with JSON file and in-memory backends
//! - `services`: The ledger store and aggregate maintenance
//! - `export`: JSON backup export and import
//! - `reports`: Period windows, breakdowns, summaries and pagination
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::models::{Money, TransactionDraft};
//! use fintrack::services::LedgerStore;
//! use fintrack::storage::MemoryStorage;
//!
//! let mut store = LedgerStore::open(MemoryStorage::new())?;
//! store.set_initial_balance(Money::from_cents(100_000))?;
//! store.add_transaction(TransactionDraft::expense("Lunch", Money::from_cents(1_250), "2"))?;
//! assert_eq!(store.balance().total, Money::from_cents(98_750));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use logging::init_tracing;
