//! Preference CLI commands

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{find_currency, Theme, CURRENCIES};
use crate::services::LedgerStore;
use crate::storage::LedgerPersistence;

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show all preferences
    Show,
    /// Set the display currency
    Currency {
        /// ISO code (e.g., USD, EUR); omit to list the supported ones
        code: Option<String>,
    },
    /// Set the color theme
    Theme {
        /// light or dark
        theme: Theme,
    },
    /// Show or hide amounts in output
    #[command(name = "toggle-balance")]
    ToggleBalance,
    /// Turn notifications on or off
    #[command(name = "toggle-notifications")]
    ToggleNotifications,
    /// Turn biometric unlock on or off
    #[command(name = "toggle-biometric")]
    ToggleBiometric,
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Handle a preferences command
pub fn handle_prefs_command<P: LedgerPersistence>(
    store: &mut LedgerStore<P>,
    cmd: PrefsCommands,
) -> TrackerResult<()> {
    match cmd {
        PrefsCommands::Show => {
            let prefs = store.preferences();
            let currency = prefs.currency_info();
            println!("Currency:      {} ({})", currency.code, currency.name);
            println!("Theme:         {}", prefs.theme);
            println!("Show balance:  {}", on_off(prefs.show_balance));
            println!("Notifications: {}", on_off(prefs.notifications_enabled));
            println!("Biometric:     {}", on_off(prefs.is_biometric_enabled));
        }

        PrefsCommands::Currency { code: None } => {
            println!("Supported currencies:");
            for currency in CURRENCIES {
                println!("  {}  {:<5} {}", currency.code, currency.symbol.trim(), currency.name);
            }
        }

        PrefsCommands::Currency { code: Some(code) } => {
            let currency = find_currency(&code).ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Unsupported currency '{}'. Run 'fintrack prefs currency' to list them",
                    code
                ))
            })?;
            store.set_currency(currency.code)?;
            println!("Currency set to {} ({})", currency.code, currency.name);
        }

        PrefsCommands::Theme { theme } => {
            store.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }

        PrefsCommands::ToggleBalance => {
            let shown = store.toggle_balance_visibility()?;
            println!("Amounts are now {}", if shown { "shown" } else { "hidden" });
        }

        PrefsCommands::ToggleNotifications => {
            let enabled = store.toggle_notifications()?;
            println!("Notifications turned {}", on_off(enabled));
        }

        PrefsCommands::ToggleBiometric => {
            let enabled = store.toggle_biometric()?;
            println!("Biometric unlock turned {}", on_off(enabled));
        }
    }

    Ok(())
}
