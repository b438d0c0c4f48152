//! Transaction model
//!
//! A transaction records a single income or expense. The stored amount is
//! always a non-negative magnitude; the direction lives in [`TransactionType`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    /// Short display string
    pub title: String,

    /// Non-negative magnitude
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub date: DateTime<Utc>,

    /// May reference a category that no longer exists
    pub category_id: CategoryId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Build a stored transaction from a draft and an assigned id
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            kind: draft.kind,
            date: draft.date,
            category_id: draft.category_id,
            note: draft.note,
        }
    }

    /// Effect on the running balance: `+amount` for income, `-amount` for expense
    pub fn signed_amount(&self) -> Money {
        signed(self.kind, self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Copy the payload of this transaction into a draft
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            title: self.title.clone(),
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category_id: self.category_id.clone(),
            note: self.note.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Transaction payload without an identifier, supplied to add/update
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub date: DateTime<Utc>,
    pub category_id: CategoryId,
    pub note: Option<String>,
}

impl TransactionDraft {
    /// New draft dated now
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            kind,
            date: Utc::now(),
            category_id: category_id.into(),
            note: None,
        }
    }

    pub fn income(
        title: impl Into<String>,
        amount: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self::new(title, amount, TransactionType::Income, category_id)
    }

    pub fn expense(
        title: impl Into<String>,
        amount: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self::new(title, amount, TransactionType::Expense, category_id)
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn signed_amount(&self) -> Money {
        signed(self.kind, self.amount)
    }

    /// Check the draft before handing it to the store
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }

        Ok(())
    }
}

fn signed(kind: TransactionType, amount: Money) -> Money {
    match kind {
        TransactionType::Income => amount,
        TransactionType::Expense => -amount,
    }
}

/// Validation errors for transaction drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NegativeAmount(Money),
    ZeroAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount must be a positive magnitude (got {}); \
                 use the transaction type for direction",
                amount
            ),
            Self::ZeroAmount => write!(f, "Amount must be greater than zero"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
