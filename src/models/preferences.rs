//! User preferences stored alongside the ledger
//!
//! These values do not affect ledger arithmetic; they are persisted in the
//! same blob so the whole app state survives restarts together.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// A supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Currencies offered in settings; the first entry is the fallback
pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    Currency {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    Currency {
        code: "JPY",
        symbol: "¥",
        name: "Japanese Yen",
    },
    Currency {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
    },
    Currency {
        code: "CAD",
        symbol: "CA$",
        name: "Canadian Dollar",
    },
    Currency {
        code: "AUD",
        symbol: "A$",
        name: "Australian Dollar",
    },
    Currency {
        code: "CHF",
        symbol: "CHF ",
        name: "Swiss Franc",
    },
    Currency {
        code: "CNY",
        symbol: "CN¥",
        name: "Chinese Yuan",
    },
];

/// Look up a currency by ISO code (case-insensitive)
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    #[serde(default)]
    pub is_biometric_enabled: bool,

    #[serde(default = "default_true")]
    pub show_balance: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            theme: Theme::default(),
            notifications_enabled: true,
            is_biometric_enabled: false,
            show_balance: true,
        }
    }
}

impl Preferences {
    /// The configured currency, falling back to the first supported one
    pub fn currency_info(&self) -> &'static Currency {
        find_currency(&self.currency).unwrap_or(&CURRENCIES[0])
    }
}
