//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger store and the report functions.
//! Input is validated here, before the store is called: the store itself
//! accepts any draft.

pub mod balance;
pub mod category;
pub mod data;
pub mod prefs;
pub mod report;
pub mod transaction;

pub use balance::{handle_balance_command, handle_init_command, BalanceCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_data_command, DataCommands};
pub use prefs::{handle_prefs_command, PrefsCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, Transaction, TransactionType};
use crate::reports::period::start_of_day;
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Parse a user-supplied amount, rejecting negatives
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50' or '12.75'. Error: {}",
            input, e
        ))
    })?;

    if amount.is_negative() {
        return Err(TrackerError::Validation(format!(
            "Amount must not be negative: {}",
            input
        )));
    }

    Ok(amount)
}

/// Parse a calendar date with the configured format
pub(crate) fn parse_date(input: &str, format: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(input, format).map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid date: '{}'. Expected format {}",
            input, format
        ))
    })
}

/// Parse an optional date argument into a timestamp at the start of that day
pub(crate) fn parse_timestamp(input: Option<&str>, format: &str) -> TrackerResult<DateTime<Utc>> {
    match input {
        Some(s) => Ok(start_of_day(parse_date(s, format)?)),
        None => Ok(Utc::now()),
    }
}

/// Find a category by exact id, then by name (case-insensitive)
pub(crate) fn resolve_category<P: LedgerPersistence>(
    store: &LedgerStore<P>,
    input: &str,
) -> TrackerResult<Category> {
    store
        .get_category(&input.into())
        .or_else(|| store.find_category_by_name(input))
        .cloned()
        .ok_or_else(|| TrackerError::category_not_found(input))
}

/// Transactions must be booked against a category of the same partition
pub(crate) fn check_category_kind(category: &Category, kind: TransactionType) -> TrackerResult<()> {
    if category.is_income != kind.is_income() {
        return Err(TrackerError::Validation(format!(
            "Category '{}' is an {} category and cannot hold {} transactions",
            category.name,
            category.kind_label(),
            kind
        )));
    }
    Ok(())
}

/// Find a transaction by full id or by a unique id prefix
pub(crate) fn resolve_transaction<P: LedgerPersistence>(
    store: &LedgerStore<P>,
    input: &str,
) -> TrackerResult<Transaction> {
    if let Some(txn) = store.get_transaction(&input.into()) {
        return Ok(txn.clone());
    }

    let matches: Vec<&Transaction> = store
        .transactions()
        .iter()
        .filter(|t| t.id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(TrackerError::transaction_not_found(input)),
        _ => Err(TrackerError::Validation(format!(
            "Transaction id '{}' is ambiguous ({} matches)",
            input,
            matches.len()
        ))),
    }
}
