//! Aggregation error types

use thiserror::Error;

/// Errors raised by a daily data source
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV file could not be read
    #[error("CSV error in {table}: {error}")]
    Csv { table: String, error: String },

    /// The source cannot serve requests
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while building daily records
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Fetching raw rows failed
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Range start is after its end
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// The fetch window cannot be represented
    #[error("Date range out of bounds: {0}")]
    OutOfBounds(String),
}

/// Result type alias for aggregation
pub type AggregateResult<T> = Result<T, AggregateError>;
