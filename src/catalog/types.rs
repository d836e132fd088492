//! Metric definitions
//!
//! A `MetricDefinition` describes one daily metric the engine can compare.
//! Two properties are encoded by convention rather than by extra fields:
//!
//! - a metric is **boolean** when its unit is the literal `"boolean"`
//! - a metric is **lagged** (previous-day) when its key is `prevDay` followed
//!   by the capitalized key of the metric it shifts, e.g. `prevDayWorkout`
//!   holds yesterday's `workout`

use serde::{Deserialize, Serialize};

/// Unit tag that marks a binary metric
pub const BOOLEAN_UNIT: &str = "boolean";

/// Key prefix that marks a previous-day metric
pub const LAG_PREFIX: &str = "prevDay";

/// Definition of a daily metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MetricDefinition {
    /// Unique symbolic identifier (e.g. "sleepScore")
    pub key: String,
    /// Display name (e.g. "Sleep Score")
    pub label: String,
    /// Phrase used in generated interpretations. For boolean metrics this
    /// reads as an event ("you worked out"), otherwise as a noun ("sleep score").
    pub description: String,
    /// Unit of measurement; "boolean" marks a binary metric
    pub unit: String,
}

impl MetricDefinition {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            unit: unit.into(),
        }
    }

    /// Whether this metric takes true/false values
    pub fn is_boolean(&self) -> bool {
        self.unit == BOOLEAN_UNIT
    }

    /// Whether this metric holds the previous day's value of another metric
    pub fn is_lagged(&self) -> bool {
        self.lag_source().is_some()
    }

    /// Key of the metric this one lags, if it is a previous-day metric
    ///
    /// `prevDayTotalCaffeineMg` -> `totalCaffeineMg`
    pub fn lag_source(&self) -> Option<String> {
        let rest = self.key.strip_prefix(LAG_PREFIX)?;
        let mut chars = rest.chars();
        let first = chars.next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        Some(first.to_ascii_lowercase().to_string() + chars.as_str())
    }
}

impl std::fmt::Display for MetricDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.key)
    }
}
