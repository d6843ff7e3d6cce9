//! Error types for the countrydb library
//!
//! Query operations are total and never fail; every error in this crate is
//! a construction failure. A catalogue that cannot be built correctly is
//! rejected outright, since an empty or partial catalogue would silently
//! corrupt every subsequent query.

use thiserror::Error;

/// Main error type for catalogue construction
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// A country code appeared more than once in the source dataset.
    /// Codes are the primary lookup key and must be unique.
    #[error("duplicate country code in dataset: {code}")]
    DuplicateCode {
        /// The offending code
        code: String,
    },

    /// The source dataset is not valid JSON or does not match the expected
    /// record shape
    #[error("failed to parse country dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error while reading a dataset file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalogue operations
pub type Result<T> = std::result::Result<T, CatalogueError>;
