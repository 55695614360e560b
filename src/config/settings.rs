//! User settings for penny-cli
//!
//! A small JSON settings file next to the ledger. Holds display preferences
//! and defaults for the sample data generator.

use serde::{Deserialize, Serialize};

use super::paths::PennyPaths;
use crate::error::PennyError;

/// User settings for penny-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default number of months the sample data generator covers
    #[serde(default = "default_generate_months")]
    pub default_generate_months: u32,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_generate_months() -> u32 {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            default_generate_months: default_generate_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PennyPaths) -> Result<Self, PennyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PennyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PennyError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PennyPaths) -> Result<(), PennyError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PennyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PennyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
