//! Summary reports
//!
//! Dashboard statistics with period-over-period growth, short-range totals
//! and income/expense time series.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use crate::models::{Money, Transaction, TransactionType};

use super::filter::Totals;
use super::period::{start_of_day, RollingPeriod};

/// Percentage change from `previous` to `current`.
///
/// With no previous amount, any current amount counts as 100% growth.
pub fn growth_percentage(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return if current.is_positive() { 100.0 } else { 0.0 };
    }
    (current - previous).as_decimal() / previous.abs().as_decimal() * 100.0
}

/// A current amount compared with the previous window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub current: Money,
    pub previous: Money,
    pub growth: f64,
}

impl Trend {
    pub fn new(current: Money, previous: Money) -> Self {
        Self {
            current,
            previous,
            growth: growth_percentage(current, previous),
        }
    }
}

/// Income and expense for a rolling window, compared with the window before
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub period: RollingPeriod,
    pub income: Trend,
    pub expenses: Trend,
    /// Transactions in the current window
    pub transaction_count: usize,
}

impl DashboardStats {
    pub fn generate(
        transactions: &[Transaction],
        period: RollingPeriod,
        now: DateTime<Utc>,
    ) -> Self {
        let current_window = period.window(now);
        let previous_window = period.previous(now);

        let current = Totals::of(transactions.iter().filter(|t| current_window.contains(t.date)));
        let previous = Totals::of(transactions.iter().filter(|t| previous_window.contains(t.date)));

        Self {
            period,
            income: Trend::new(current.income, previous.income),
            expenses: Trend::new(current.expense, previous.expense),
            transaction_count: current.count,
        }
    }

    /// Format the stats for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Summary: {}\n", self.period));
        output.push_str(&"=".repeat(48));
        output.push('\n');

        for (label, trend) in [("Income", &self.income), ("Expenses", &self.expenses)] {
            output.push_str(&format!(
                "{:<12} {:>16} {:>+9.1}%\n",
                label,
                trend.current.format_with_symbol(currency_symbol),
                trend.growth
            ));
        }

        output.push_str(&format!("{:<12} {:>16}\n", "Transactions", self.transaction_count));
        output
    }
}

/// One type's totals for today, the last seven days and all time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecentTotals {
    pub today: Money,
    pub week: Money,
    pub all_time: Money,
}

impl RecentTotals {
    pub fn generate<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        kind: TransactionType,
        now: DateTime<Utc>,
    ) -> Self {
        let today = start_of_day(now.date_naive());
        let week_ago = today - Duration::days(7);

        transactions
            .into_iter()
            .filter(|t| t.kind == kind)
            .fold(Self::default(), |mut acc, txn| {
                if txn.date >= today {
                    acc.today += txn.amount;
                }
                if txn.date >= week_ago {
                    acc.week += txn.amount;
                }
                acc.all_time += txn.amount;
                acc
            })
    }
}

/// Bucket size for a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// The last 30 days
    Daily,
    /// The last 12 months
    Monthly,
}

impl Granularity {
    pub fn bucket_count(&self) -> usize {
        match self {
            Self::Daily => 30,
            Self::Monthly => 12,
        }
    }
}

/// One bucket of a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    /// The day, or the first of the month
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// Income and expense per bucket, oldest first, ending with the bucket that
/// contains `now`. Transactions outside the range (including future ones)
/// are ignored.
pub fn time_series(
    transactions: &[Transaction],
    granularity: Granularity,
    now: DateTime<Utc>,
) -> Vec<SeriesPoint> {
    let today = now.date_naive();
    let count = granularity.bucket_count();

    let mut points: Vec<SeriesPoint> = (0..count)
        .rev()
        .map(|back| SeriesPoint {
            date: bucket_date(granularity, today, back as u32),
            income: Money::zero(),
            expense: Money::zero(),
        })
        .collect();

    for txn in transactions {
        let back = buckets_back(granularity, today, txn.date.date_naive());
        if back < 0 || back >= count as i64 {
            continue;
        }

        let point = &mut points[count - 1 - back as usize];
        match txn.kind {
            TransactionType::Income => point.income += txn.amount,
            TransactionType::Expense => point.expense += txn.amount,
        }
    }

    points
}

fn bucket_date(granularity: Granularity, today: NaiveDate, back: u32) -> NaiveDate {
    match granularity {
        Granularity::Daily => today - Duration::days(back as i64),
        Granularity::Monthly => {
            let first = today.with_day(1).unwrap_or(today);
            first.checked_sub_months(Months::new(back)).unwrap_or(first)
        }
    }
}

fn buckets_back(granularity: Granularity, today: NaiveDate, date: NaiveDate) -> i64 {
    match granularity {
        Granularity::Daily => (today - date).num_days(),
        Granularity::Monthly => {
            (today.year() - date.year()) as i64 * 12 + today.month() as i64 - date.month() as i64
        }
    }
}

/// Format a time series for terminal display
pub fn format_series(
    points: &[SeriesPoint],
    granularity: Granularity,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(match granularity {
        Granularity::Daily => "Daily Trend (last 30 days)\n",
        Granularity::Monthly => "Monthly Trend (last 12 months)\n",
    });
    output.push_str(&"=".repeat(48));
    output.push('\n');
    output.push_str(&format!("{:<12} {:>16} {:>16}\n", "Period", "Income", "Expenses"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for point in points {
        let label = match granularity {
            Granularity::Daily => point.date.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => point.date.format("%b %Y").to_string(),
        };
        output.push_str(&format!(
            "{:<12} {:>16} {:>16}\n",
            label,
            point.income.format_with_symbol(currency_symbol),
            point.expense.format_with_symbol(currency_symbol)
        ));
    }

    output
}
