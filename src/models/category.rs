//! Category model
//!
//! Categories partition transactions into an income set and an expense set.
//! Each category carries running aggregates (`amount`, `count`) that the
//! ledger store keeps in step with the transactions assigned to it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Display name used for transactions whose category does not resolve
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A transaction category with its running aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    /// Icon name (presentation only)
    #[serde(default)]
    pub icon: String,

    /// Color as a hex string (presentation only)
    #[serde(default)]
    pub color: String,

    /// Which partition this category belongs to; fixed at creation
    pub is_income: bool,

    /// Sum of the magnitudes of transactions currently assigned here
    #[serde(default)]
    pub amount: Money,

    /// Number of transactions currently assigned here
    #[serde(default)]
    pub count: i64,
}

impl Category {
    /// Build a category from a draft with zeroed aggregates
    pub fn from_draft(id: CategoryId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon,
            color: draft.color,
            is_income: draft.is_income,
            amount: Money::zero(),
            count: 0,
        }
    }

    fn seeded(id: &str, name: &str, icon: &str, color: &str, is_income: bool) -> Self {
        Self {
            id: CategoryId::from(id),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            is_income,
            amount: Money::zero(),
            count: 0,
        }
    }

    /// Partition label for display
    pub fn kind_label(&self) -> &'static str {
        if self.is_income {
            "income"
        } else {
            "expense"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Category payload without an identifier or aggregates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_income: bool,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, is_income: bool) -> Self {
        Self {
            name: name.into(),
            icon: "tag".to_string(),
            color: "#64748B".to_string(),
            is_income,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

/// The category set a fresh or cleared ledger starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::seeded("1", "Shopping", "shopping-bag", "#4CAF50", false),
        Category::seeded("2", "Food", "cutlery", "#FF9800", false),
        Category::seeded("3", "Transport", "car", "#2196F3", false),
        Category::seeded("4", "Entertainment", "gamepad", "#9C27B0", false),
        Category::seeded("5", "Bills", "file-text-o", "#F44336", false),
        Category::seeded("6", "Salary", "money", "#4CAF50", true),
        Category::seeded("7", "Gifts", "gift", "#E91E63", false),
        Category::seeded("8", "Investments", "line-chart", "#009688", true),
        Category::seeded("9", "Health", "medkit", "#00BCD4", false),
        Category::seeded("10", "Education", "graduation-cap", "#FF5722", false),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 10);

        let income: Vec<_> = defaults
            .iter()
            .filter(|c| c.is_income)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(income, vec!["Salary", "Investments"]);
        assert!(defaults.iter().all(|c| c.amount.is_zero() && c.count == 0));
    }

    #[test]
    fn test_from_draft_zeroes_aggregates() {
        let draft = CategoryDraft::new("Freelance", true).with_icon("laptop");
        let category = Category::from_draft(CategoryId::from("x"), draft);
        assert_eq!(category.name, "Freelance");
        assert_eq!(category.icon, "laptop");
        assert!(category.is_income);
        assert_eq!(category.count, 0);
        assert!(category.amount.is_zero());
    }

    #[test]
    fn test_validation() {
        assert!(CategoryDraft::new("Pets", false).validate().is_ok());
        assert_eq!(
            CategoryDraft::new("", false).validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            CategoryDraft::new("a".repeat(51), false).validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let category = default_categories().remove(5);
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["isIncome"], true);
        assert_eq!(value["amount"], 0);
        assert_eq!(value["count"], 0);
    }
}
