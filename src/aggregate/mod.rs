//! Daily Metric Aggregator
//!
//! Produces the aligned per-day time series the discovery engine analyses.
//!
//! - **types**: `MetricValue`, `DailyMetricRecord`, `DateRange`
//! - **source**: raw table rows, the `DailySource` trait and `MemorySource`
//! - **csv_source**: `DailySource` over a directory of CSV files
//! - **aggregator**: the date-spine left join and univariate helpers
//! - **error**: source and aggregation errors
//!
//! # Example
//!
//! ```rust,no_run
//! use daylens::aggregate::{CsvSource, DailyAggregator, DateRange};
//! use daylens::catalog::MetricCatalog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(MetricCatalog::builtin()?);
//!     let aggregator = DailyAggregator::new(Arc::new(CsvSource::new("./data")), catalog);
//!
//!     let range = DateRange::last_days(30).ok_or("invalid range")?;
//!     let records = aggregator.fetch_daily_metrics(range).await?;
//!     assert_eq!(records.len(), 30);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod csv_source;
pub mod error;
pub mod source;
pub mod types;

pub use aggregator::{
    extract_metric_values, minimum_sample_size, summarize_metric, DailyAggregator, MetricSummary,
    MINIMUM_SAMPLE_SIZE, SUNNY_CLOUD_COVER_PCT,
};
pub use csv_source::CsvSource;
pub use error::{AggregateError, AggregateResult, SourceError};
pub use source::{
    BrewType, CoffeeEntry, DailySource, DatedRow, MemorySource, RatingRow, RitualRow, SleepRow,
    WeatherObservation, WorkoutKind, WorkoutRow,
};
pub use types::{DailyMetricRecord, DateRange, MetricValue};
