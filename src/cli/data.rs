//! Data CLI commands
//!
//! Backup export, restore from a backup, wiping the ledger and checking
//! category aggregates against the transactions.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::display::AmountFormatter;
use crate::error::TrackerResult;
use crate::export::{default_export_path, read_import_file, write_export_file};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export transactions, categories and balance to a JSON backup
    Export {
        /// Output file (defaults to a dated file in the export directory)
        output: Option<PathBuf>,
    },

    /// Replace all ledger data with the contents of a JSON backup
    Import {
        /// Backup file to read
        file: PathBuf,
        /// Confirm replacing the current data
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all transactions and restore the default categories
    Clear {
        /// Confirm deleting all data
        #[arg(short, long)]
        yes: bool,
    },

    /// Check category totals against the transactions
    Doctor {
        /// Rebuild category totals that disagree
        #[arg(long)]
        fix: bool,
    },
}

/// Handle a data command
pub fn handle_data_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: DataCommands,
) -> TrackerResult<()> {
    match cmd {
        DataCommands::Export { output } => {
            let path =
                output.unwrap_or_else(|| default_export_path(paths.export_dir(), Utc::now()));
            let export = store.snapshot();
            write_export_file(&export, &path, settings.pretty_export)?;

            println!("Exported to: {}", path.display());
            println!("  Transactions: {}", export.transactions.len());
            println!("  Categories:   {}", export.categories.len());
        }

        DataCommands::Import { file, yes } => {
            // Parse before asking, so a bad file is reported either way
            let snapshot = read_import_file(&file)?;

            if !yes {
                println!("This will replace all current data with {}:", file.display());
                println!("  Transactions: {}", snapshot.transactions.len());
                println!("  Categories:   {}", snapshot.categories.len());
                println!();
                println!("Use --yes to confirm the import");
                return Ok(());
            }

            let counts = (snapshot.transactions.len(), snapshot.categories.len());
            store.import_data(snapshot)?;

            println!("Imported {} transactions and {} categories", counts.0, counts.1);

            let drift = store.aggregate_drift();
            if !drift.is_empty() {
                println!();
                println!(
                    "Warning: {} categories have totals that do not match their transactions.",
                    drift.len()
                );
                println!("Run 'fintrack data doctor --fix' to rebuild them.");
            }
        }

        DataCommands::Clear { yes } => {
            if !yes {
                println!("This will permanently delete all transactions and custom categories.");
                println!("Use --yes to confirm");
                return Ok(());
            }

            store.clear_all_data()?;
            println!("All data has been cleared");
        }

        DataCommands::Doctor { fix } => {
            let drift = store.aggregate_drift();

            if drift.is_empty() {
                println!("doctor: no issues found");
                return Ok(());
            }

            let fmt = AmountFormatter::new(store.preferences()).unmasked();
            println!(
                "{:<20} {:>14} {:>8} {:>14} {:>8}",
                "Category", "Stored", "Count", "Expected", "Count"
            );
            println!("{}", "-".repeat(68));
            for d in &drift {
                println!(
                    "{:<20} {:>14} {:>8} {:>14} {:>8}",
                    d.category_name,
                    fmt.format(d.stored.amount),
                    d.stored.count,
                    fmt.format(d.expected.amount),
                    d.expected.count
                );
            }

            if fix {
                let fixed = store.recalculate_aggregates()?;
                println!();
                println!("Rebuilt totals for {} categories", fixed.len());
            } else {
                println!();
                println!("Use --fix to rebuild these totals");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Money, TransactionDraft};
    use crate::storage::MemoryStorage;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TrackerPaths, LedgerStore<MemoryStorage>) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = LedgerStore::open(MemoryStorage::new()).unwrap();
        store.set_initial_balance(Money::from_cents(100000)).unwrap();
        store
            .add_transaction(TransactionDraft::expense("Rent", Money::from_cents(80000), "5"))
            .unwrap();
        (temp_dir, paths, store)
    }

    #[test]
    fn test_export_import_roundtrip() {
        let (temp_dir, paths, mut store) = setup();
        let settings = Settings::default();
        let file = temp_dir.path().join("backup.json");

        let export = DataCommands::Export {
            output: Some(file.clone()),
        };
        handle_data_command(&mut store, &paths, &settings, export).unwrap();
        let exported = store.state().clone();

        store.clear_all_data().unwrap();
        assert!(store.transactions().is_empty());

        // Without --yes nothing changes
        let unconfirmed = DataCommands::Import {
            file: file.clone(),
            yes: false,
        };
        handle_data_command(&mut store, &paths, &settings, unconfirmed).unwrap();
        assert!(store.transactions().is_empty());

        let confirmed = DataCommands::Import { file, yes: true };
        handle_data_command(&mut store, &paths, &settings, confirmed).unwrap();
        assert_eq!(store.transactions(), exported.transactions.as_slice());
        assert_eq!(store.balance(), exported.balance);
    }

    #[test]
    fn test_export_default_path() {
        let (_temp_dir, paths, mut store) = setup();
        let cmd = DataCommands::Export { output: None };
        handle_data_command(&mut store, &paths, &Settings::default(), cmd).unwrap();

        let entries: Vec<_> = fs::read_dir(paths.export_dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_import_invalid_file_leaves_store() {
        let (temp_dir, paths, mut store) = setup();
        let file = temp_dir.path().join("bad.json");
        fs::write(&file, r#"{"transactions": []}"#).unwrap();
        let before = store.state().clone();

        let cmd = DataCommands::Import { file, yes: true };
        assert!(handle_data_command(&mut store, &paths, &Settings::default(), cmd).is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_clear_requires_yes() {
        let (_temp_dir, paths, mut store) = setup();
        let settings = Settings::default();

        let cmd = DataCommands::Clear { yes: false };
        handle_data_command(&mut store, &paths, &settings, cmd).unwrap();
        assert_eq!(store.transactions().len(), 1);

        let cmd = DataCommands::Clear { yes: true };
        handle_data_command(&mut store, &paths, &settings, cmd).unwrap();
        assert!(store.transactions().is_empty());
        assert_eq!(store.categories(), default_categories().as_slice());
        assert!(store.balance().total.is_zero());
    }

    #[test]
    fn test_doctor_fix() {
        let (_temp_dir, paths, mut store) = setup();
        let mut snapshot = store.snapshot();
        snapshot.categories[4].count = 7;
        store.import_data(snapshot).unwrap();

        let settings = Settings::default();
        let cmd = DataCommands::Doctor { fix: false };
        handle_data_command(&mut store, &paths, &settings, cmd).unwrap();
        assert_eq!(store.aggregate_drift().len(), 1);

        let cmd = DataCommands::Doctor { fix: true };
        handle_data_command(&mut store, &paths, &settings, cmd).unwrap();
        assert!(store.aggregate_drift().is_empty());
    }
}
