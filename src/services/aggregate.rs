//! Incremental maintenance of balance and category aggregates
//!
//! Category `amount` is always the sum of unsigned magnitudes of the
//! transactions assigned to the category, whatever their type. Applying a
//! transaction adds its magnitude and one to `count`; reversing subtracts
//! exactly the same. The balance moves by the signed amount (income `+`,
//! expense `-`).

use std::collections::HashMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Balance, Category, CategoryId, Money, Transaction};

/// Apply a transaction's effect to the balance and its category.
///
/// Returns `Ok(false)` if the category did not resolve (the balance is still
/// updated). Overflow of the balance or a category total is a
/// [`TrackerError::Validation`] and leaves the inputs untouched.
pub fn apply(
    categories: &mut [Category],
    balance: &mut Balance,
    txn: &Transaction,
) -> TrackerResult<bool> {
    let total = balance
        .total
        .checked_add(txn.signed_amount())
        .ok_or_else(|| overflow("balance", txn))?;

    let category = categories.iter_mut().find(|c| c.id == txn.category_id);
    let updated = match &category {
        Some(category) => Some((
            category
                .amount
                .checked_add(txn.amount)
                .ok_or_else(|| overflow("category total", txn))?,
            category.count.checked_add(1).ok_or_else(|| overflow("category count", txn))?,
        )),
        None => None,
    };

    balance.total = total;
    match (category, updated) {
        (Some(category), Some((amount, count))) => {
            category.amount = amount;
            category.count = count;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Undo a transaction's effect on the balance and its category.
///
/// Exact inverse of [`apply`], with the same overflow handling.
pub fn reverse(
    categories: &mut [Category],
    balance: &mut Balance,
    txn: &Transaction,
) -> TrackerResult<bool> {
    let total = balance
        .total
        .checked_sub(txn.signed_amount())
        .ok_or_else(|| overflow("balance", txn))?;

    let category = categories.iter_mut().find(|c| c.id == txn.category_id);
    let updated = match &category {
        Some(category) => Some((
            category
                .amount
                .checked_sub(txn.amount)
                .ok_or_else(|| overflow("category total", txn))?,
            category.count.checked_sub(1).ok_or_else(|| overflow("category count", txn))?,
        )),
        None => None,
    };

    balance.total = total;
    match (category, updated) {
        (Some(category), Some((amount, count))) => {
            category.amount = amount;
            category.count = count;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn overflow(what: &str, txn: &Transaction) -> TrackerError {
    TrackerError::Validation(format!(
        "Transaction amount {} would overflow the {}",
        txn.amount, what
    ))
}

/// Per-category totals computed from scratch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub amount: Money,
    pub count: i64,
}

/// Recompute what every category's aggregates should be from the transactions
pub fn expected_totals(transactions: &[Transaction]) -> HashMap<CategoryId, CategoryTotals> {
    let mut totals: HashMap<CategoryId, CategoryTotals> = HashMap::new();
    for txn in transactions {
        let entry = totals.entry(txn.category_id.clone()).or_default();
        entry.amount += txn.amount;
        entry.count += 1;
    }
    totals
}

/// A category whose stored aggregates disagree with its transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateDrift {
    pub category_id: CategoryId,
    pub category_name: String,
    pub stored: CategoryTotals,
    pub expected: CategoryTotals,
}

/// Find categories whose stored aggregates have drifted
pub fn find_drift(categories: &[Category], transactions: &[Transaction]) -> Vec<AggregateDrift> {
    let expected = expected_totals(transactions);

    categories
        .iter()
        .filter_map(|category| {
            let stored = CategoryTotals {
                amount: category.amount,
                count: category.count,
            };
            let want = expected.get(&category.id).copied().unwrap_or_default();
            (stored != want).then(|| AggregateDrift {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                stored,
                expected: want,
            })
        })
        .collect()
}

/// Overwrite every category's aggregates with freshly computed totals
pub fn recalculate(categories: &mut [Category], transactions: &[Transaction]) {
    let expected = expected_totals(transactions);
    for category in categories.iter_mut() {
        let totals = expected.get(&category.id).copied().unwrap_or_default();
        category.amount = totals.amount;
        category.count = totals.count;
    }
}
