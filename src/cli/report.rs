//! Report CLI commands
//!
//! Implements CLI commands for generating reports.

use chrono::Utc;
use clap::Subcommand;

use super::parse_date;
use crate::config::Settings;
use crate::display::{format_transaction_register, AmountFormatter, MASK};
use crate::error::TrackerResult;
use crate::models::TransactionType;
use crate::reports::{
    filter_transactions, format_series, time_series, CategoryBreakdown, DashboardStats, Granularity,
    Period, RecentTotals, RollingPeriod, TransactionFilter,
};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals per category for income or expenses
    Breakdown {
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Period: today, week, month, year or all
        #[arg(short, long, default_value = "month")]
        period: Period,
        /// Start date of a custom range (overrides --period)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End date of a custom range
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Only show the largest categories
        #[arg(long)]
        top: Option<usize>,
    },

    /// Income and expenses compared with the previous period
    Summary {
        /// Rolling period: week, month or year
        #[arg(short, long, default_value = "month")]
        period: RollingPeriod,
        /// Number of recent transactions to show
        #[arg(long, default_value = "5")]
        recent: usize,
    },

    /// Income and expenses per day (last 30 days) or per month (last 12)
    Trend {
        /// Group by month instead of by day
        #[arg(long)]
        monthly: bool,
    },
}

/// Handle a report command
pub fn handle_report_command<P: LedgerPersistence>(
    store: &LedgerStore<P>,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let fmt = AmountFormatter::new(store.preferences());
    let now = Utc::now();

    // Reports are all amounts; there is nothing to show when they are hidden
    if fmt.is_masked() {
        println!(
            "Balances are hidden ({}). Run 'fintrack prefs toggle-balance' to show them.",
            MASK
        );
        return Ok(());
    }

    match cmd {
        ReportCommands::Breakdown {
            kind,
            period,
            from,
            to,
            top,
        } => {
            let period = match (from, to) {
                (Some(from), Some(to)) => Period::custom(
                    parse_date(&from, &settings.date_format)?,
                    parse_date(&to, &settings.date_format)?,
                )?,
                _ => period,
            };
            let window = period.window(now);

            let breakdown = CategoryBreakdown::generate(
                store.transactions().iter().filter(|t| window.contains(t.date)),
                store.categories(),
                kind,
            );
            let breakdown = match top {
                Some(limit) => CategoryBreakdown {
                    rows: breakdown.top(limit).to_vec(),
                    ..breakdown
                },
                None => breakdown,
            };

            println!("{}", period);
            print!("{}", breakdown.format_terminal(fmt.symbol()));
        }

        ReportCommands::Summary { period, recent } => {
            let stats = DashboardStats::generate(store.transactions(), period, now);
            print!("{}", stats.format_terminal(fmt.symbol()));

            println!();
            println!("{:<12} {:>16} {:>16} {:>16}", "", "Today", "Last 7 days", "All time");
            let rows = [
                ("Income", TransactionType::Income),
                ("Expenses", TransactionType::Expense),
            ];
            for (label, kind) in rows {
                let totals = RecentTotals::generate(store.transactions(), kind, now);
                println!(
                    "{:<12} {:>16} {:>16} {:>16}",
                    label,
                    fmt.format(totals.today),
                    fmt.format(totals.week),
                    fmt.format(totals.all_time)
                );
            }

            if recent > 0 {
                let everything = TransactionFilter::new();
                let latest: Vec<_> = filter_transactions(store.transactions(), &everything)
                    .into_iter()
                    .take(recent)
                    .collect();

                println!();
                println!("Recent transactions");
                let register = format_transaction_register(
                    &latest,
                    |t| store.category_name(&t.category_id),
                    &fmt,
                );
                print!("{}", register);
            }
        }

        ReportCommands::Trend { monthly } => {
            let granularity = if monthly {
                Granularity::Monthly
            } else {
                Granularity::Daily
            };
            let series = time_series(store.transactions(), granularity, now);
            print!("{}", format_series(&series, granularity, fmt.symbol()));
        }
    }

    Ok(())
}
