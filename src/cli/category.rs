//! Category CLI commands
//!
//! Implements CLI commands for category management.

use chrono::Utc;
use clap::Subcommand;

use super::resolve_category;
use crate::display::{
    format_category_details, format_category_list, format_transaction_register, AmountFormatter,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::CategoryDraft;
use crate::reports::{filter_transactions, Period, Totals, TransactionFilter};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Make it an income category (default: expense)
        #[arg(long)]
        income: bool,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
        /// Color (e.g., "#FF9800")
        #[arg(long)]
        color: Option<String>,
    },

    /// Show category details and its transactions
    Show {
        /// Category name or ID
        category: String,
        /// Period: today, week, month, year or all
        #[arg(short, long, default_value = "all")]
        period: Period,
    },
}

/// Handle a category command
pub fn handle_category_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    let fmt = AmountFormatter::new(store.preferences());

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories(), &fmt));
        }

        CategoryCommands::Add {
            name,
            income,
            icon,
            color,
        } => {
            let name = name.trim().to_string();
            if store.find_category_by_name(&name).is_some() {
                return Err(TrackerError::Validation(format!(
                    "Category '{}' already exists",
                    name
                )));
            }

            let mut draft = CategoryDraft::new(name, income);
            if let Some(icon) = icon {
                draft = draft.with_icon(icon);
            }
            if let Some(color) = color {
                draft = draft.with_color(color);
            }
            draft
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let category = store.add_category(draft)?;
            println!("Created {} category: {}", category.kind_label(), category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category, period } => {
            let ledger: &LedgerStore<P> = store;
            let category = resolve_category(ledger, &category)?;
            print!("{}", format_category_details(&category, &fmt));

            let filter = TransactionFilter::new()
                .within(period.window(Utc::now()))
                .in_category(category.id.clone());
            let matched = filter_transactions(ledger.transactions(), &filter);
            let totals = Totals::of(matched.iter().copied());

            println!();
            println!(
                "{}: {} in {} transactions",
                period,
                fmt.format(totals.income + totals.expense),
                totals.count
            );
            println!();
            print!("{}", format_transaction_register(&matched, |_| category.name.as_str(), &fmt));
        }
    }

    Ok(())
}
