//! Discovery error types

use crate::aggregate::AggregateError;
use thiserror::Error;

/// Errors that stop a discovery run
///
/// Small samples, zero-variance series and unknown keys in single-pair
/// lookups are normal outcomes, not errors.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Options are out of range or name unknown metrics
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Building the daily records failed
    #[error("Aggregation error: {0}")]
    Aggregate(#[from] AggregateError),
}

/// Result type alias for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
