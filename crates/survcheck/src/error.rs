//! Error types for the survcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for survcheck operations.
#[derive(Debug, Error)]
pub enum SurvcheckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a Stata dictionary file.
    #[error("Dictionary error at line {line}: {message}")]
    Dict { line: usize, message: String },

    /// Error decoding a fixed-width data row.
    #[error("Parse error at row {row}, field '{field}': {message}")]
    Parse {
        row: usize,
        field: String,
        message: String,
    },

    /// A required column is not present in the table.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Empty file or no data to check.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for survcheck operations.
pub type Result<T> = std::result::Result<T, SurvcheckError>;
