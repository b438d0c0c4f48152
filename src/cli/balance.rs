//! Balance CLI commands
//!
//! `init` seeds the starting balance of a fresh ledger; `balance` shows or
//! overwrites it.

use clap::Subcommand;

use super::parse_amount;
use crate::display::AmountFormatter;
use crate::error::{TrackerError, TrackerResult};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the current balance
    Show,
    /// Overwrite the balance with a new starting amount
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        amount: String,
    },
}

/// Handle `fintrack init`
pub fn handle_init_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    amount: &str,
    force: bool,
) -> TrackerResult<()> {
    if store.balance().is_initialized && !force {
        return Err(TrackerError::Validation(
            "Ledger is already initialized. Use 'fintrack balance set' or pass --force".into(),
        ));
    }

    let amount = parse_amount(amount)?;
    store.set_initial_balance(amount)?;

    let fmt = AmountFormatter::new(store.preferences()).unmasked();
    println!("Ledger initialized with a balance of {}", fmt.format(amount));
    println!();
    println!("Run 'fintrack category list' to see the available categories.");
    Ok(())
}

/// Handle a balance command
pub fn handle_balance_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    cmd: Option<BalanceCommands>,
) -> TrackerResult<()> {
    match cmd.unwrap_or(BalanceCommands::Show) {
        BalanceCommands::Show => {
            let balance = store.balance();
            let fmt = AmountFormatter::new(store.preferences());

            println!("Balance: {}", fmt.format(balance.total));
            if !balance.is_initialized {
                println!();
                println!("No starting balance set yet. Run 'fintrack init <amount>'.");
            }
        }

        BalanceCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            store.set_initial_balance(amount)?;

            let fmt = AmountFormatter::new(store.preferences()).unmasked();
            println!("Balance set to {}", fmt.format(amount));
        }
    }

    Ok(())
}
