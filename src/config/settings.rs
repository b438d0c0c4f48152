//! Application settings for fintrack
//!
//! Settings govern how the tool behaves (listing page size, date format,
//! export formatting). User preferences such as currency and theme are part
//! of the ledger state instead, see [`crate::models::Preferences`].

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of transactions per page in listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether export documents are pretty-printed
    #[serde(default = "default_pretty_export")]
    pub pretty_export: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_size() -> usize {
    15
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_pretty_export() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            page_size: default_page_size(),
            date_format: default_date_format(),
            pretty_export: default_pretty_export(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.page_size == 0 {
            tracing::warn!("page_size of 0 in settings, using {}", default_page_size());
            settings.page_size = default_page_size();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
