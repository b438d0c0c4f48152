//! Category breakdown
//!
//! Totals per category for one side of the ledger (income or expense), with
//! each category's share of that side's total as a rounded percentage.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Money, Transaction, TransactionType};

/// One category's line in a breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub category_id: CategoryId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub amount: Money,
    pub count: usize,
    /// Rounded share of the breakdown total
    pub percentage: i64,
}

/// Per-category totals for one transaction type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub kind: TransactionType,
    /// Total of all transactions of `kind`, including uncategorized ones
    pub total: Money,
    /// Categories with a non-zero amount, largest first
    pub rows: Vec<BreakdownRow>,
}

impl CategoryBreakdown {
    /// Build a breakdown over `transactions`.
    ///
    /// Only categories in the matching partition (`is_income` agreeing with
    /// `kind`) get a row.
    pub fn generate<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        categories: &[Category],
        kind: TransactionType,
    ) -> Self {
        let mut per_category: HashMap<&CategoryId, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions.into_iter().filter(|t| t.kind == kind) {
            total += txn.amount;
            let entry = per_category.entry(&txn.category_id).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut rows: Vec<BreakdownRow> = categories
            .iter()
            .filter(|c| c.is_income == kind.is_income())
            .filter_map(|category| {
                let (amount, count) = per_category.get(&category.id).copied()?;
                amount.is_positive().then(|| BreakdownRow {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                    color: category.color.clone(),
                    amount,
                    count,
                    percentage: rounded_percentage(amount, total),
                })
            })
            .collect();

        // Stable sort keeps category order among equal amounts
        rows.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self { kind, total, rows }
    }

    /// The `limit` largest categories
    pub fn top(&self, limit: usize) -> &[BreakdownRow] {
        &self.rows[..limit.min(self.rows.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let heading = match self.kind {
            TransactionType::Income => "Income by Category",
            TransactionType::Expense => "Expenses by Category",
        };

        let mut output = String::new();
        output.push_str(heading);
        output.push('\n');
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No data for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>14} {:>6} {:>6}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<30} {:>14} {:>6} {:>5}%\n",
                row.name,
                row.amount.format_with_symbol(currency_symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}

/// `part / total * 100`, rounded half up; 0 when the total is not positive
pub fn rounded_percentage(part: Money, total: Money) -> i64 {
    if !total.is_positive() {
        return 0;
    }
    let (part, total) = (part.cents() as i128, total.cents() as i128);
    ((part * 200 + total).div_euclid(total * 2)) as i64
}
