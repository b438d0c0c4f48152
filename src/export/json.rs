//! JSON export and import
//!
//! The export document carries the ledger (transactions, categories,
//! balance) plus an export timestamp and a format version. Preferences are
//! never exported.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Balance, Category, StoreState, Transaction};
use crate::storage::write_json_atomic;

/// Current export format version
pub const EXPORT_VERSION: &str = "1.0";

/// Keys an import document must carry
const REQUIRED_KEYS: [&str; 3] = ["transactions", "categories", "balance"];

/// Full ledger export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerExport {
    pub transactions: Vec<Transaction>,

    pub categories: Vec<Category>,

    pub balance: Balance,

    /// When the export was taken; optional on import
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,

    /// Format version; not checked on import
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    EXPORT_VERSION.to_string()
}

impl LedgerExport {
    /// Snapshot the ledger part of a store state, stamped now
    pub fn from_state(state: &StoreState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            categories: state.categories.clone(),
            balance: state.balance,
            export_date: Some(Utc::now()),
            version: EXPORT_VERSION.to_string(),
        }
    }
}

/// Write an export document to any writer
pub fn export_json<W: Write>(
    export: &LedgerExport,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Write an export document to a file atomically
pub fn write_export_file(
    export: &LedgerExport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> TrackerResult<()> {
    let path = path.as_ref();
    write_json_atomic(path, export, pretty)
        .map_err(|e| TrackerError::Export(format!("{}: {}", path.display(), e)))?;

    tracing::info!(
        path = %path.display(),
        transactions = export.transactions.len(),
        "ledger exported"
    );
    Ok(())
}

/// Default file name for an export taken at `now`
pub fn default_export_file_name(now: DateTime<Utc>) -> String {
    format!("fintrack_backup_{}.json", now.format("%Y-%m-%d"))
}

/// Default export path inside `dir`
pub fn default_export_path(dir: impl AsRef<Path>, now: DateTime<Utc>) -> PathBuf {
    dir.as_ref().join(default_export_file_name(now))
}

/// Parse an import document.
///
/// The document must be a JSON object with `transactions`, `categories` and
/// `balance`; nothing else is required. Every amount must fit the money range
/// and transaction amounts must not be negative. Aggregates are taken as-is.
pub fn parse_import(json_str: &str) -> TrackerResult<LedgerExport> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| TrackerError::Import(format!("Invalid JSON: {}", e)))?;

    let object = value.as_object().ok_or_else(|| {
        TrackerError::Import("Invalid backup file format: expected an object".into())
    })?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| object.get(*key).map_or(true, |v| v.is_null()))
        .collect();
    if !missing.is_empty() {
        return Err(TrackerError::Import(format!(
            "Invalid backup file format: missing {}",
            missing.join(", ")
        )));
    }

    let export: LedgerExport =
        serde_json::from_value(value).map_err(|e| TrackerError::Import(e.to_string()))?;

    if let Some(txn) = export.transactions.iter().find(|t| t.amount.is_negative()) {
        return Err(TrackerError::Import(format!(
            "Transaction {} has a negative amount: {}",
            txn.id, txn.amount
        )));
    }

    Ok(export)
}

/// Read and parse an import file
pub fn read_import_file(path: impl AsRef<Path>) -> TrackerResult<LedgerExport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| TrackerError::Import(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_import(&contents)
}
