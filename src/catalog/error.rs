//! Catalog error types
//!
//! Every variant is a start-up configuration error: a catalog that fails
//! validation is never used.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a metric catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two definitions share a key
    #[error("Duplicate metric key: {0}")]
    DuplicateKey(String),

    /// A required field is blank
    #[error("Metric '{key}' has an empty {field}")]
    EmptyField { key: String, field: &'static str },

    /// A previous-day metric refers to a metric that is not in the catalog
    #[error("Lagged metric '{key}' refers to unknown metric '{source_key}'")]
    UnknownLagSource { key: String, source_key: String },

    /// The catalog has no metrics
    #[error("Metric catalog is empty")]
    Empty,

    /// Catalog file could not be read
    #[error("Failed to read catalog file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
