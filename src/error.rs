//! Custom error types for penny-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for penny-cli operations
#[derive(Error, Debug)]
pub enum PennyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PennyError {
    /// Create a validation error for a date that is not in dd-mm-yyyy form
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid date '{}'. Use dd-mm-yyyy (e.g., 19-12-2025)",
            input.into()
        ))
    }

    /// Create a validation error for a non-positive or non-numeric amount
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid amount '{}'. Amount must be a positive number like 42.50",
            input.into()
        ))
    }

    /// Create a validation error for an unknown category
    pub fn invalid_category(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid category '{}'. Use 'Income' or 'Expense' (or 'I'/'E')",
            input.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PennyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PennyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for PennyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for penny-cli operations
pub type PennyResult<T> = Result<T, PennyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PennyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = PennyError::invalid_date("2025-12-19");
        assert!(err.is_validation());
        assert!(err.to_string().contains("dd-mm-yyyy"));
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = PennyError::invalid_amount("-5");
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let penny_err: PennyError = io_err.into();
        assert!(matches!(penny_err, PennyError::Io(_)));
    }
}
