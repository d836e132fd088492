//! Pairs that are related by construction
//!
//! These always correlate because one metric is derived from the other
//! (caffeine from coffee entries, sunny days from cloud cover). Discovery
//! skips them so they do not crowd out real findings.
//!
//! Two previous-day metrics are also skipped: their relationship is the
//! matching same-day pair shifted by one day.

use crate::catalog::keys::*;
use crate::catalog::MetricDefinition;

/// Unordered pairs of keys that discovery never reports
pub const OBVIOUS_PAIRS: &[(&str, &str)] = &[
    (TOTAL_CAFFEINE_MG, COFFEE_COUNT),
    (RUN_DISTANCE_KM, RUN_DURATION_MIN),
    (AVG_CLOUD_COVER, SUNNY_DAY),
    (WORKOUT, WORKOUT_MINUTES),
    (RUN_DURATION_MIN, WORKOUT_MINUTES),
    (RUN_DISTANCE_KM, WORKOUT_MINUTES),
    (PREV_DAY_WORKOUT, PREV_DAY_WORKOUT_MINUTES),
];

/// Whether the keys form a listed pair, in either order
pub fn is_obvious_pair(a: &str, b: &str) -> bool {
    OBVIOUS_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Whether one metric is the previous-day shift of the other
pub fn is_own_lag(a: &MetricDefinition, b: &MetricDefinition) -> bool {
    a.lag_source().as_deref() == Some(b.key.as_str())
        || b.lag_source().as_deref() == Some(a.key.as_str())
}

/// Whether both metrics are previous-day shifts
pub fn is_lag_shift(a: &MetricDefinition, b: &MetricDefinition) -> bool {
    a.is_lagged() && b.is_lagged()
}

/// Whether discovery should skip this pair
pub fn is_excluded(a: &MetricDefinition, b: &MetricDefinition) -> bool {
    is_obvious_pair(&a.key, &b.key) || is_own_lag(a, b) || is_lag_shift(a, b)
}
