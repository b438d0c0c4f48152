//! Reporting periods
//!
//! Calendar periods (`Today`, `Week`, `Month`, `Year`, `Custom`) resolve to
//! an inclusive [`DateWindow`] ending at the end of the current day. Rolling
//! periods look back a fixed span from the start of today and are used for
//! period-over-period comparisons. All boundaries are computed in UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{TrackerError, TrackerResult};

/// An inclusive time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// A window covering all of time
    pub fn unbounded() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Whole days from `start` to `end`, both inclusive
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::unbounded() {
            return write!(f, "all time");
        }
        write!(f, "{} to {}", self.start.date_naive(), self.end.date_naive())
    }
}

/// 00:00:00.000 on `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// 23:59:59.999 on `date`
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Calendar period used to filter transaction listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    /// Since Sunday of the current week
    Week,
    /// Since the 1st of the current month
    Month,
    /// Since January 1st of the current year
    Year,
    /// Whole days, both inclusive
    Custom { start: NaiveDate, end: NaiveDate },
    All,
}

impl Period {
    /// Resolve the period against `now`
    pub fn window(&self, now: DateTime<Utc>) -> DateWindow {
        let today = now.date_naive();
        let until_today = |start: NaiveDate| DateWindow::from_dates(start, today);

        match *self {
            Self::Today => until_today(today),
            Self::Week => {
                let since_sunday = today.weekday().num_days_from_sunday() as i64;
                until_today(today - Duration::days(since_sunday))
            }
            Self::Month => until_today(today.with_day(1).unwrap_or(today)),
            Self::Year => until_today(NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)),
            Self::Custom { start, end } => DateWindow::from_dates(start, end),
            Self::All => DateWindow::unbounded(),
        }
    }

    /// Build a custom period, rejecting an end before the start
    pub fn custom(start: NaiveDate, end: NaiveDate) -> TrackerResult<Self> {
        if end < start {
            return Err(TrackerError::Validation(format!(
                "End date {} is before start date {}",
                end, start
            )));
        }
        Ok(Self::Custom { start, end })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "Today"),
            Self::Week => write!(f, "This week"),
            Self::Month => write!(f, "This month"),
            Self::Year => write!(f, "This year"),
            Self::Custom { start, end } => write!(f, "{} to {}", start, end),
            Self::All => write!(f, "All time"),
        }
    }
}

impl FromStr for Period {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "day" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(TrackerError::Validation(format!(
                "Unknown period '{}'. Use today, week, month, year or all",
                other
            ))),
        }
    }
}

/// Trailing window used for period-over-period comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollingPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl RollingPeriod {
    fn step_back(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        let back = match self {
            Self::Week => from.checked_sub_signed(Duration::days(7)),
            Self::Month => from.checked_sub_months(Months::new(1)),
            Self::Year => from.checked_sub_months(Months::new(12)),
        };
        back.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// The current window: one span back from the start of today, through
    /// the end of today
    pub fn window(&self, now: DateTime<Utc>) -> DateWindow {
        let today = now.date_naive();
        DateWindow::new(self.step_back(start_of_day(today)), end_of_day(today))
    }

    /// The window of the same span immediately before [`window`](Self::window)
    pub fn previous(&self, now: DateTime<Utc>) -> DateWindow {
        let current = self.window(now);
        DateWindow::new(
            self.step_back(current.start),
            current.start - Duration::milliseconds(1),
        )
    }
}

impl fmt::Display for RollingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "Last 7 days"),
            Self::Month => write!(f, "Last month"),
            Self::Year => write!(f, "Last year"),
        }
    }
}

impl FromStr for RollingPeriod {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(TrackerError::Validation(format!(
                "Unknown period '{}'. Use week, month or year",
                other
            ))),
        }
    }
}
