//! Currency-aware amount formatting

use crate::models::{Money, Preferences, TransactionType};

/// Shown instead of an amount when balances are hidden
pub const MASK: &str = "********";

/// Formats money in the user's currency, honouring the show-balance toggle
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    symbol: &'static str,
    masked: bool,
}

impl AmountFormatter {
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            symbol: preferences.currency_info().symbol,
            masked: !preferences.show_balance,
        }
    }

    /// Always show amounts, whatever the preference says
    pub fn unmasked(mut self) -> Self {
        self.masked = false;
        self
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// `$1,234.50`, or the mask
    pub fn format(&self, amount: Money) -> String {
        if self.masked {
            return MASK.to_string();
        }
        amount.format_with_symbol(self.symbol)
    }

    /// Magnitude prefixed with `+` for income and `-` for expense
    pub fn format_signed(&self, amount: Money, kind: TransactionType) -> String {
        if self.masked {
            return MASK.to_string();
        }
        let sign = if kind.is_income() { "+" } else { "-" };
        format!("{}{}", sign, amount.abs().format_with_symbol(self.symbol))
    }
}
