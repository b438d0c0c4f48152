//! Transaction filtering
//!
//! Selects transactions by time window, type and category, newest first.

use crate::models::{CategoryId, Money, Transaction, TransactionType};

use super::period::DateWindow;

/// Criteria for selecting transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub window: Option<DateWindow>,
    pub kind: Option<TransactionType>,
    /// Empty means any category
    pub categories: Vec<CategoryId>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn within(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn of_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn in_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.categories.push(category_id.into());
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(window) = &self.window {
            if !window.contains(txn.date) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        self.categories.is_empty() || self.categories.contains(&txn.category_id)
    }
}

/// Transactions matching `filter`, newest first
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut matched: Vec<&Transaction> =
        transactions.iter().filter(|t| filter.matches(t)).collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// Income and expense totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub count: usize,
}

impl Totals {
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions.into_iter().fold(Self::default(), |mut acc, txn| {
            match txn.kind {
                TransactionType::Income => acc.income += txn.amount,
                TransactionType::Expense => acc.expense += txn.amount,
            }
            acc.count += 1;
            acc
        })
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}
