//! Transaction display formatting
//!
//! Register-style rows and detail views. Category names are resolved by the
//! caller so that dangling ids can render as "Uncategorized".

use crate::models::Transaction;

use super::amount::AmountFormatter;

/// Format a single transaction as a register row
pub fn format_transaction_row(
    txn: &Transaction,
    category_name: &str,
    fmt: &AmountFormatter,
) -> String {
    format!(
        "{:8} {} {:24} {:16} {:>14}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.title, 24),
        truncate(category_name, 16),
        fmt.format_signed(txn.amount, txn.kind)
    )
}

/// Format a list of transactions as a register.
///
/// `category_name` maps a transaction to the name shown in its row.
pub fn format_transaction_register<'a, F>(
    transactions: &[&'a Transaction],
    category_name: F,
    fmt: &AmountFormatter,
) -> String
where
    F: Fn(&'a Transaction) -> &'a str,
{
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:24} {:16} {:>14}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, category_name(*txn), fmt));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: &str,
    fmt: &AmountFormatter,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", fmt.format_signed(txn.amount, txn.kind)));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Category:    {}\n", category_name));

    if let Some(note) = txn.note.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

/// Truncate a string to a maximum number of characters, padding short ones
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Preferences, TransactionDraft, TransactionId};

    fn sample() -> Transaction {
        Transaction::from_draft(
            TransactionId::from("abcdef1234"),
            TransactionDraft::expense("Weekly groceries", Money::from_cents(8250), "2")
                .with_note("market"),
        )
    }

    #[test]
    fn test_row() {
        let fmt = AmountFormatter::new(&Preferences::default());
        let row = format_transaction_row(&sample(), "Food", &fmt);
        assert!(row.starts_with("abcdef12"));
        assert!(row.contains("Weekly groceries"));
        assert!(row.contains("-$82.50"));
    }

    #[test]
    fn test_register() {
        let fmt = AmountFormatter::new(&Preferences::default());
        let txn = sample();
        let output = format_transaction_register(&[&txn], |_| "Food", &fmt);
        assert!(output.contains("Category"));
        assert!(output.contains("Food"));

        assert_eq!(format_transaction_register(&[], |_| "", &fmt), "No transactions found.\n");
    }

    #[test]
    fn test_details() {
        let fmt = AmountFormatter::new(&Preferences::default());
        let output = format_transaction_details(&sample(), "Uncategorized", &fmt);
        assert!(output.contains("Type:        expense"));
        assert!(output.contains("Category:    Uncategorized"));
        assert!(output.contains("Note:        market"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("café au lait", 7), "café...");
    }
}
