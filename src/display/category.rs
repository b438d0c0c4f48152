//! Category display formatting
//!
//! Lists categories split into their expense and income partitions.

use crate::models::Category;

use super::amount::AmountFormatter;
use super::transaction::truncate;

/// Format all categories, expense partition first
pub fn format_category_list(categories: &[Category], fmt: &AmountFormatter) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();

    for (heading, is_income) in [("Expense categories", false), ("Income categories", true)] {
        let members: Vec<&Category> = categories
            .iter()
            .filter(|c| c.is_income == is_income)
            .collect();
        if members.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(heading);
        output.push('\n');

        for (i, category) in members.iter().enumerate() {
            let prefix = if i == members.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{:8} {} {:>14} ({} txn)\n",
                prefix,
                category.id.short(),
                truncate(&category.name, 20),
                fmt.format(category.amount),
                category.count
            ));
        }
    }

    output
}

/// Format category details for display
pub fn format_category_details(category: &Category, fmt: &AmountFormatter) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category:     {}\n", category.name));
    output.push_str(&format!("ID:           {}\n", category.id));
    output.push_str(&format!("Type:         {}\n", category.kind_label()));
    output.push_str(&format!("Icon:         {}\n", category.icon));
    output.push_str(&format!("Color:        {}\n", category.color));
    output.push_str(&format!("Total:        {}\n", fmt.format(category.amount)));
    output.push_str(&format!("Transactions: {}\n", category.count));

    output
}
