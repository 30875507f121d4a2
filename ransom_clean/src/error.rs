//! Error types for cleaning operations.

use polars::prelude::PolarsError;

/// Result type for cleaning operations
pub type CleaningResult<T> = Result<T, CleaningError>;

/// Error type for cleaning operations.
///
/// Only structural problems surface here. A cell that cannot be parsed is
/// never an error: it is replaced with a null.
#[derive(Debug, thiserror::Error)]
pub enum CleaningError {
    #[error("Column '{0}' not found in DataFrame")]
    ColumnNotFound(String),

    #[error("Duplicate column name after cleaning: {0}")]
    DuplicateColumn(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

impl CleaningError {
    /// Whether this error is the "column not found" structural failure.
    pub fn is_column_not_found(&self) -> bool {
        matches!(self, CleaningError::ColumnNotFound(_))
    }
}
