//! Discovery options and findings

use super::error::{DiscoveryError, DiscoveryResult};
use crate::aggregate::DateRange;
use crate::catalog::MetricDefinition;
use crate::stats::CorrelationResult;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAYS: u32 = 90;
pub const DEFAULT_P_VALUE_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MIN_ABS_R: f64 = 0.3;

/// Parameters for a discovery run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryOptions {
    /// Lookback window in days, ending on `end_date`
    pub days: u32,
    /// Keep pairs with p <= this
    pub p_value_threshold: f64,
    /// Keep pairs with |r| >= this
    pub min_abs_r: f64,
    /// Restrict the search to these keys (None = whole catalog)
    pub metrics_to_analyze: Option<Vec<String>>,
    /// Last day of the window (None = today, UTC)
    pub end_date: Option<NaiveDate>,
    /// Evaluate pairs on the rayon thread pool
    pub parallel: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            p_value_threshold: DEFAULT_P_VALUE_THRESHOLD,
            min_abs_r: DEFAULT_MIN_ABS_R,
            metrics_to_analyze: None,
            end_date: None,
            parallel: false,
        }
    }
}

impl DiscoveryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn p_value_threshold(mut self, threshold: f64) -> Self {
        self.p_value_threshold = threshold;
        self
    }

    pub fn min_abs_r(mut self, min_abs_r: f64) -> Self {
        self.min_abs_r = min_abs_r;
        self
    }

    pub fn metrics<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.metrics_to_analyze = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check value ranges (metric keys are checked against the catalog later)
    pub fn validate(&self) -> DiscoveryResult<()> {
        if self.days == 0 {
            return Err(DiscoveryError::InvalidOptions(
                "days must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.p_value_threshold) {
            return Err(DiscoveryError::InvalidOptions(format!(
                "p_value_threshold must be between 0 and 1, got {}",
                self.p_value_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.min_abs_r) {
            return Err(DiscoveryError::InvalidOptions(format!(
                "min_abs_r must be between 0 and 1, got {}",
                self.min_abs_r
            )));
        }
        Ok(())
    }

    /// The analysis window
    pub fn range(&self) -> DiscoveryResult<DateRange> {
        analysis_window(self.days, self.end_date)
    }
}

/// `days` calendar days ending on `end_date` (today when None)
pub(crate) fn analysis_window(days: u32, end_date: Option<NaiveDate>) -> DiscoveryResult<DateRange> {
    let end = end_date.unwrap_or_else(|| Utc::now().date_naive());
    DateRange::ending_on(end, days).ok_or_else(|| {
        DiscoveryError::InvalidOptions(format!("cannot build a {days}-day window ending {end}"))
    })
}

/// One discovered relationship between two metrics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscoveredCorrelation {
    pub metric_a: MetricDefinition,
    pub metric_b: MetricDefinition,
    pub correlation: CorrelationResult,
    /// Window the pair was analysed over
    pub date_range: DateRange,
    /// Plain-language description of the finding
    pub interpretation: String,
}

impl DiscoveredCorrelation {
    /// Whether either side is the given metric
    pub fn involves(&self, key: &str) -> bool {
        self.metric_a.key == key || self.metric_b.key == key
    }

    /// Whether this finding is about exactly these two metrics, in any order
    pub fn is_pair(&self, a: &str, b: &str) -> bool {
        (self.metric_a.key == a && self.metric_b.key == b)
            || (self.metric_a.key == b && self.metric_b.key == a)
    }
}
