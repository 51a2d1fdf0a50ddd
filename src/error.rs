//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Bad date or amount input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A mutation was attempted with no CSV file bound to the session
    #[error("No file selected: create a new CSV file or open an existing one first")]
    NoFileSelected,

    /// A CSV line could not be turned into an expense record
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The file picker was dismissed
    #[error("Cancelled: {0}")]
    UserCancelled(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a malformed row error
    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Create a cancellation error for a dismissed picker
    pub fn cancelled(what: impl Into<String>) -> Self {
        Self::UserCancelled(what.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a malformed row error
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }

    /// Check if the user dismissed a picker
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::UserCancelled(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::MalformedRow {
            line,
            reason: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for LedgerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("amount cannot be negative".into());
        assert_eq!(
            err.to_string(),
            "Validation error: amount cannot be negative"
        );
    }

    #[test]
    fn test_malformed_row_error() {
        let err = LedgerError::malformed_row(2, "invalid amount 'abc'");
        assert_eq!(
            err.to_string(),
            "Malformed row at line 2: invalid amount 'abc'"
        );
        assert!(err.is_malformed_row());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_cancelled_error() {
        let err = LedgerError::cancelled("file creation");
        assert_eq!(err.to_string(), "Cancelled: file creation");
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
