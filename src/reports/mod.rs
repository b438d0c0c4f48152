//! Reports module for fintrack
//!
//! Pure functions over a ledger snapshot: period windows, transaction
//! filtering, category breakdowns, dashboard statistics, time series and
//! pagination. Nothing here touches the store.

pub mod breakdown;
pub mod filter;
pub mod pagination;
pub mod period;
pub mod summary;

pub use breakdown::{BreakdownRow, CategoryBreakdown};
pub use filter::{filter_transactions, Totals, TransactionFilter};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use period::{DateWindow, Period, RollingPeriod};
pub use summary::{
    format_series, growth_percentage, time_series, DashboardStats, Granularity, RecentTotals,
    SeriesPoint, Trend,
};
