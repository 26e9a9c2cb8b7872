//! Error types for data operations.
//!
//! Provides unified error handling for dataset loading, view transformation,
//! and selection validation.

use thiserror::Error;

/// Errors that can occur during data operations.
///
/// Load-time variants (`Io`, `EmptyFile`, `MissingColumns`, `BadRow`) are
/// fatal to startup. Selection variants are recoverable: the controller
/// keeps the previously published chart. `Transform` indicates schema drift
/// after a successful load and is surfaced, never swallowed.
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// Required columns are absent from the header row
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A data row could not be parsed
    #[error("Bad row at line {line}: {reason}")]
    BadRow { line: usize, reason: String },

    /// The country selection was empty
    #[error("Country selection is empty")]
    EmptySelection,

    /// The country selection named countries absent from the dataset
    #[error("Unknown countries in selection: {}", names.join(", "))]
    UnknownCountries { names: Vec<String> },

    /// Unexpected shape in already-loaded data
    #[error("Transform error: {0}")]
    Transform(String),
}

impl DataError {
    /// Whether the controller may recover by keeping the previous chart
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DataError::EmptySelection | DataError::UnknownCountries { .. }
        )
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
