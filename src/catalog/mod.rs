//! Metric Catalog
//!
//! Static registry of the metrics the engine compares. Built once at
//! start-up (from the built-in table or a JSON file) and shared read-only.
//!
//! - **types**: `MetricDefinition` and the boolean/lagged conventions
//! - **keys**: metric keys the aggregator produces
//! - **defaults**: the built-in metric table
//! - **registry**: `MetricCatalog`, validated and index-addressable
//! - **error**: start-up validation errors

pub mod defaults;
pub mod error;
pub mod keys;
pub mod registry;
pub mod types;

pub use defaults::default_definitions;
pub use error::{CatalogError, CatalogResult};
pub use registry::MetricCatalog;
pub use types::{MetricDefinition, BOOLEAN_UNIT, LAG_PREFIX};
