//! Correlation Discovery
//!
//! Searches every pair of catalog metrics for statistically significant
//! relationships and describes each one in plain language.
//!
//! - **engine**: `DiscoveryEngine`, pair enumeration, statistic selection and sorting
//! - **exclusions**: pairs that correlate by construction or repeat a same-day pair
//! - **interpret**: plain-language sentences for findings
//! - **types**: `DiscoveryOptions` and `DiscoveredCorrelation`
//!
//! # Example
//!
//! ```rust,no_run
//! use daylens::aggregate::CsvSource;
//! use daylens::catalog::MetricCatalog;
//! use daylens::discovery::{DiscoveryEngine, DiscoveryOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DiscoveryEngine::new(
//!         Arc::new(CsvSource::new("./data")),
//!         Arc::new(MetricCatalog::builtin()?),
//!     );
//!
//!     for finding in engine.discover(&DiscoveryOptions::default()).await? {
//!         println!("{}", finding.interpretation);
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod exclusions;
pub mod interpret;
pub mod types;

pub use engine::{compare_findings, sort_findings, DiscoveryEngine, P_VALUE_TIE_WINDOW};
pub use error::{DiscoveryError, DiscoveryResult};
pub use exclusions::{is_excluded, is_lag_shift, is_obvious_pair, OBVIOUS_PAIRS};
pub use interpret::interpret;
pub use types::{
    DiscoveredCorrelation, DiscoveryOptions, DEFAULT_DAYS, DEFAULT_MIN_ABS_R,
    DEFAULT_P_VALUE_THRESHOLD,
};
