//! Metric catalog
//!
//! A validated, immutable table of metric definitions. Metrics are addressed
//! by their position in the table so pairwise search can index into a fixed
//! array instead of hashing keys per pair.

use super::defaults::default_definitions;
use super::error::{CatalogError, CatalogResult};
use super::types::MetricDefinition;
use std::collections::HashMap;
use std::path::Path;

/// Registry of metric definitions
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    /// Metrics in declaration order
    metrics: Vec<MetricDefinition>,
    /// Key to index lookup
    key_to_index: HashMap<String, usize>,
}

impl MetricCatalog {
    /// Build a catalog, rejecting duplicate keys, blank fields and lagged
    /// metrics whose source metric is absent
    pub fn from_definitions(metrics: Vec<MetricDefinition>) -> CatalogResult<Self> {
        if metrics.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut key_to_index = HashMap::with_capacity(metrics.len());
        for (idx, metric) in metrics.iter().enumerate() {
            validate_fields(metric)?;
            if key_to_index.insert(metric.key.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateKey(metric.key.clone()));
            }
        }

        for metric in &metrics {
            if let Some(source_key) = metric.lag_source() {
                if !key_to_index.contains_key(&source_key) {
                    return Err(CatalogError::UnknownLagSource {
                        key: metric.key.clone(),
                        source_key,
                    });
                }
            }
        }

        Ok(Self {
            metrics,
            key_to_index,
        })
    }

    /// The built-in catalog
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_definitions(default_definitions())
    }

    /// Load definitions from a JSON array file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let metrics: Vec<MetricDefinition> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        let catalog = Self::from_definitions(metrics)?;
        tracing::info!(path = ?path, metrics = catalog.len(), "Loaded metric catalog");
        Ok(catalog)
    }

    /// Get metric by key
    pub fn get(&self, key: &str) -> Option<&MetricDefinition> {
        self.index_of(key).map(|idx| &self.metrics[idx])
    }

    /// Position of a metric in the table
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.key_to_index.get(key).copied()
    }

    /// Get metric by position
    pub fn get_by_index(&self, idx: usize) -> Option<&MetricDefinition> {
        self.metrics.get(idx)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_to_index.contains_key(key)
    }

    /// All metrics in declaration order
    pub fn all(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Previous-day metrics as (lagged index, source index) pairs
    pub fn lagged_pairs(&self) -> Vec<(usize, usize)> {
        self.metrics
            .iter()
            .enumerate()
            .filter_map(|(idx, metric)| {
                let source = metric.lag_source()?;
                self.index_of(&source).map(|src| (idx, src))
            })
            .collect()
    }
}

fn validate_fields(metric: &MetricDefinition) -> CatalogResult<()> {
    let fields = [
        ("key", &metric.key),
        ("label", &metric.label),
        ("description", &metric.description),
        ("unit", &metric.unit),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                key: metric.key.clone(),
                field,
            });
        }
    }
    Ok(())
}
