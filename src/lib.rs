//! # Daylens
//!
//! Correlation discovery over daily personal metrics: sleep, caffeine,
//! exercise, weather and subjective ratings.
//!
//! ## Features
//!
//! - **Daily alignment**: one record per calendar day, left-joined from independent sources
//! - **Previous-day metrics**: lagged variants for day-after effects
//! - **Significance testing**: Pearson and point-biserial with two-tailed t-test p-values
//! - **Plain-language findings**: ranked, interpreted results with obvious pairs filtered out
//!
//! ## Modules
//!
//! - [`stats`]: correlation coefficients and significance
//! - [`catalog`]: metric definitions
//! - [`aggregate`]: daily record aggregation and data sources
//! - [`discovery`]: the pairwise discovery engine
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daylens::{CsvSource, DiscoveryEngine, DiscoveryOptions, MetricCatalog};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DiscoveryEngine::new(
//!         Arc::new(CsvSource::new("./data")),
//!         Arc::new(MetricCatalog::builtin()?),
//!     );
//!
//!     // Last 60 days, only well-supported findings
//!     let options = DiscoveryOptions::new().days(60).p_value_threshold(0.05);
//!     for finding in engine.discover(&options).await? {
//!         println!("{}", finding.interpretation);
//!     }
//!
//!     // One specific pair
//!     if let Some(pair) = engine.correlation_between("prevDayWorkout", "sleepScore", 90).await? {
//!         println!("r = {:.2}", pair.correlation.r);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod stats;

// Re-export top-level types for convenience
pub use aggregate::{
    AggregateError, CsvSource, DailyAggregator, DailyMetricRecord, DailySource, DateRange,
    MemorySource, MetricValue, SourceError,
};

pub use catalog::{CatalogError, MetricCatalog, MetricDefinition};

pub use config::{Config, ConfigError, DataConfig, DiscoveryConfig, LoggingConfig};

pub use discovery::{DiscoveredCorrelation, DiscoveryEngine, DiscoveryError, DiscoveryOptions};

pub use stats::{Confidence, CorrelationResult, Strength};
