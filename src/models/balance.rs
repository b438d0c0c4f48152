//! Balance model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Running total across all transactions, seeded by an initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Signed total: initial + income - expense
    pub total: Money,

    /// Set once the user has entered a starting balance
    #[serde(default)]
    pub is_initialized: bool,
}

impl Balance {
    /// Balance of a ledger that has never been set up
    pub const fn uninitialized() -> Self {
        Self {
            total: Money::zero(),
            is_initialized: false,
        }
    }

    /// Balance after the user entered a starting amount
    pub const fn initialized(total: Money) -> Self {
        Self {
            total,
            is_initialized: true,
        }
    }
}
