//! Path management for penny-cli
//!
//! Provides platform-appropriate path resolution for the ledger file and the
//! settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `PENNY_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (e.g., `~/.config/penny-cli` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PennyError;

/// Environment variable that overrides the data directory (used by tests)
pub const DATA_DIR_ENV: &str = "PENNY_CLI_DATA_DIR";

/// Manages all paths used by penny-cli
#[derive(Debug, Clone)]
pub struct PennyPaths {
    /// Base directory for all penny-cli data
    base_dir: PathBuf,
}

impl PennyPaths {
    /// Create a new PennyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PennyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "penny-cli").ok_or_else(|| {
                PennyError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create PennyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the CSV ledger
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("finance_data.csv")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PennyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PennyError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }

    /// Check if penny-cli has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("finance_data.csv")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dir");
        let paths = PennyPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
