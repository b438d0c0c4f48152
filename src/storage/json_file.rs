//! JSON file backend
//!
//! Persists the whole [`StoreState`] as one file (`data/store.json`) using an
//! atomic write, so a failed save never leaves a half-written ledger behind.
//!
//! Older data directories kept transactions, categories and the balance in
//! three separate files. When `store.json` is missing but any of those exist,
//! they are folded into a single state on load and written out as
//! `store.json`. The legacy files are never modified.

use serde::Deserialize;

use super::file_io::{read_json_optional, write_json_atomic};
use super::LedgerPersistence;
use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{default_categories, Balance, Category, Money, StoreState, Transaction};

/// File-backed persistence for the ledger store
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    paths: TrackerPaths,
    pretty: bool,
}

/// Balance as found in the legacy `balance.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyBalance {
    total: Option<Money>,
    #[serde(default)]
    is_initialized: bool,
}

impl JsonFileStorage {
    /// Create a new file storage, ensuring the data directory exists
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;
        Ok(Self {
            paths,
            pretty: true,
        })
    }

    /// Write compact JSON instead of pretty-printed
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    fn has_legacy_files(&self) -> bool {
        self.paths.legacy_transactions_file().exists()
            || self.paths.legacy_categories_file().exists()
            || self.paths.legacy_balance_file().exists()
    }

    /// Build a state from the three legacy files
    ///
    /// A legacy balance with a `total` is treated as initialized even if its
    /// flag says otherwise; older versions never wrote the flag reliably.
    fn load_legacy(&self) -> TrackerResult<StoreState> {
        let transactions: Vec<Transaction> =
            read_json_optional(self.paths.legacy_transactions_file())?.unwrap_or_default();

        let categories: Vec<Category> = read_json_optional(self.paths.legacy_categories_file())?
            .unwrap_or_else(default_categories);

        let legacy_balance: Option<LegacyBalance> =
            read_json_optional(self.paths.legacy_balance_file())?;
        let balance = match legacy_balance {
            Some(LegacyBalance {
                total: Some(total), ..
            }) => Balance::initialized(total),
            Some(LegacyBalance {
                total: None,
                is_initialized,
            }) => Balance {
                total: Money::zero(),
                is_initialized,
            },
            None => Balance::uninitialized(),
        };

        Ok(StoreState {
            transactions,
            categories,
            balance,
            ..StoreState::default()
        })
    }
}

impl LedgerPersistence for JsonFileStorage {
    fn load(&self) -> TrackerResult<Option<StoreState>> {
        let store_file = self.paths.store_file();

        if let Some(state) = read_json_optional::<StoreState, _>(&store_file)? {
            tracing::debug!(
                path = %store_file.display(),
                transactions = state.transactions.len(),
                "loaded store"
            );
            return Ok(Some(state));
        }

        if !self.has_legacy_files() {
            return Ok(None);
        }

        let state = self.load_legacy()?;
        tracing::warn!(
            data_dir = %self.paths.data_dir().display(),
            transactions = state.transactions.len(),
            "migrating legacy data files into store.json"
        );
        self.save(&state)?;
        Ok(Some(state))
    }

    fn save(&self, state: &StoreState) -> TrackerResult<()> {
        write_json_atomic(self.paths.store_file(), state, self.pretty)?;
        tracing::trace!(path = %self.paths.store_file().display(), "saved store");
        Ok(())
    }
}
