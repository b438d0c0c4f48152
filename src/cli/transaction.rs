//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::Utc;
use clap::Subcommand;

use super::{
    check_category_kind, parse_amount, parse_date, parse_timestamp, resolve_category,
    resolve_transaction,
};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register, AmountFormatter};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{TransactionDraft, TransactionType};
use crate::reports::{filter_transactions, paginate, Period, Totals, TransactionFilter};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "50" or "12.75")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Transaction date, defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Period: today, week, month, year or all
        #[arg(short, long, default_value = "all")]
        period: Period,
        /// Start date of a custom range (overrides --period)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End date of a custom range
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Category name or ID (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,
        /// Items per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or a unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New note (empty to remove)
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Record a copy of a transaction, dated now
    Duplicate {
        /// Transaction ID (or a unique prefix)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let fmt = AmountFormatter::new(store.preferences());

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            kind,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(store, &category)?;
            check_category_kind(&category, kind)?;

            let mut draft = TransactionDraft::new(title, amount, kind, category.id.clone())
                .with_date(parse_timestamp(date.as_deref(), &settings.date_format)?);
            if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
                draft = draft.with_note(note);
            }
            draft
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let txn = store.add_transaction(draft)?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Title:    {}", txn.title);
            println!("  Amount:   {}", fmt.format_signed(txn.amount, txn.kind));
            println!("  Category: {}", category.name);
            println!("  Balance:  {}", fmt.format(store.balance().total));
        }

        TransactionCommands::List {
            period,
            from,
            to,
            kind,
            category,
            page,
            page_size,
        } => {
            let period = match (from, to) {
                (Some(from), Some(to)) => Period::custom(
                    parse_date(&from, &settings.date_format)?,
                    parse_date(&to, &settings.date_format)?,
                )?,
                _ => period,
            };

            let ledger: &LedgerStore<P> = store;
            let mut filter = TransactionFilter::new().within(period.window(Utc::now()));
            if let Some(kind) = kind {
                filter = filter.of_kind(kind);
            }
            for name in &category {
                filter = filter.in_category(resolve_category(ledger, name)?.id);
            }

            let matched = filter_transactions(ledger.transactions(), &filter);
            let totals = Totals::of(matched.iter().copied());
            let page = paginate(matched, page, page_size.unwrap_or(settings.page_size));

            println!("{} ({} transactions)", period, page.total_items);
            println!();
            let register = format_transaction_register(
                &page.items,
                |t| ledger.category_name(&t.category_id),
                &fmt,
            );
            print!("{}", register);

            if page.total_items > 0 {
                println!();
                println!(
                    "Income: {}  Expenses: {}",
                    fmt.format(totals.income),
                    fmt.format(totals.expense)
                );
                println!("Page {} of {}", page.page, page.total_pages.max(1));
                if page.has_more {
                    println!("Use --page {} to see more", page.page + 1);
                }
            }
        }

        TransactionCommands::Show { id } => {
            let txn = resolve_transaction(store, &id)?;
            print!(
                "{}",
                format_transaction_details(&txn, store.category_name(&txn.category_id), &fmt)
            );
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let txn = resolve_transaction(store, &id)?;
            let mut draft = txn.to_draft();

            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(category) = category {
                draft.category_id = resolve_category(store, &category)?.id;
            }
            if let Some(date) = date {
                draft.date = parse_timestamp(Some(&date), &settings.date_format)?;
            }
            if let Some(note) = note {
                draft.note = Some(note).filter(|n| !n.trim().is_empty());
            }

            // A kind change must still agree with the (possibly unchanged) category
            if let Some(category) = store.get_category(&draft.category_id) {
                check_category_kind(category, draft.kind)?;
            }
            draft
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let updated = store
                .update_transaction(&txn.id, draft)?
                .ok_or_else(|| TrackerError::transaction_not_found(txn.id.as_str()))?;

            println!("Updated transaction: {}", updated.id);
            println!("  Balance: {}", fmt.format(store.balance().total));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = resolve_transaction(store, &id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Title:  {}", txn.title);
                println!("  Date:   {}", txn.date.format("%Y-%m-%d"));
                println!("  Amount: {}", fmt.format_signed(txn.amount, txn.kind));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = store
                .delete_transaction(&txn.id)?
                .ok_or_else(|| TrackerError::transaction_not_found(txn.id.as_str()))?;

            println!("Deleted transaction: {} ({})", deleted.id, deleted.title);
            println!("  Balance: {}", fmt.format(store.balance().total));
        }

        TransactionCommands::Duplicate { id } => {
            let txn = resolve_transaction(store, &id)?;
            let copy = store
                .duplicate_transaction(&txn.id)?
                .ok_or_else(|| TrackerError::transaction_not_found(txn.id.as_str()))?;

            println!("Duplicated transaction {} as {}", txn.id.short(), copy.id);
            println!("  Balance: {}", fmt.format(store.balance().total));
        }
    }

    Ok(())
}
