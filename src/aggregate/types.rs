//! Core data types for daily aggregation
//!
//! - `MetricValue`: a tagged per-metric value (numeric, boolean or missing)
//! - `DailyMetricRecord`: every metric's value for one calendar day
//! - `DateRange`: an inclusive span of calendar days

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of one metric on one day
///
/// Serializes as a JSON number, boolean or `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum MetricValue {
    Numeric(f64),
    Boolean(bool),
    #[default]
    Missing,
}

impl MetricValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, MetricValue::Missing)
    }

    /// Numeric payload, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetricValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => MetricValue::Numeric(v),
            _ => MetricValue::Missing,
        }
    }
}

impl From<Option<bool>> for MetricValue {
    fn from(value: Option<bool>) -> Self {
        value.map(MetricValue::Boolean).unwrap_or(MetricValue::Missing)
    }
}

/// One calendar day with a value for every catalog metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMetricRecord {
    pub date: NaiveDate,
    pub values: BTreeMap<String, MetricValue>,
}

impl DailyMetricRecord {
    /// A record with no metrics filled in
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }

    /// Value of a metric; `Missing` when the key is unknown
    pub fn get(&self, key: &str) -> MetricValue {
        self.values.get(key).copied().unwrap_or_default()
    }

    /// Number of metrics with a value on this day
    pub fn present_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_missing()).count()
    }
}

/// Inclusive range of calendar days: `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, returning None if start is after end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// The `days` calendar days ending on (and including) `end`
    pub fn ending_on(end: NaiveDate, days: u32) -> Option<Self> {
        if days == 0 {
            return None;
        }
        let start = end.checked_sub_days(Days::new(u64::from(days) - 1))?;
        Some(Self { start, end })
    }

    /// The last `days` calendar days ending today (UTC)
    pub fn last_days(days: u32) -> Option<Self> {
        Self::ending_on(Utc::now().date_naive(), days)
    }

    /// A single day
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Number of calendar days covered, `(end - start).days + 1`
    ///
    /// Zero when `start` is after `end`.
    pub fn days(&self) -> usize {
        let span = self.end.signed_duration_since(self.start).num_days() + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every date in the range, ascending
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.days())
    }

    /// Same end, start moved `days` earlier
    pub fn extend_back(&self, days: u64) -> Option<Self> {
        let start = self.start.checked_sub_days(Days::new(days))?;
        Some(Self {
            start,
            end: self.end,
        })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_days() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(range.days(), 31);
        assert_eq!(range.dates().count(), 31);
        assert_eq!(range.dates().last(), Some(date(2024, 1, 31)));

        let single = DateRange::day(date(2024, 2, 29));
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn test_date_range_rejects_inverted() {
        assert!(DateRange::new(date(2024, 1, 2), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_inverted_fields_cover_no_days() {
        // Fields are public, so an inverted range can still be built
        let inverted = DateRange {
            start: date(2024, 1, 10),
            end: date(2024, 1, 8),
        };
        assert_eq!(inverted.days(), 0);
        assert_eq!(inverted.dates().count(), 0);

        let json = r#"{"start":"2024-01-10","end":"2024-01-09"}"#;
        let parsed: DateRange = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.days(), 0);
    }

    #[test]
    fn test_date_range_ending_on() {
        let range = DateRange::ending_on(date(2024, 3, 31), 90).unwrap();
        assert_eq!(range.days(), 90);
        assert_eq!(range.start, date(2024, 1, 2));
        assert!(DateRange::ending_on(date(2024, 3, 31), 0).is_none());
    }

    #[test]
    fn test_date_range_contains_and_extend() {
        let range = DateRange::new(date(2024, 1, 10), date(2024, 1, 20)).unwrap();
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 21)));

        let extended = range.extend_back(1).unwrap();
        assert_eq!(extended.start, date(2024, 1, 9));
        assert_eq!(extended.end, range.end);
    }

    #[test]
    fn test_metric_value_conversions() {
        assert_eq!(MetricValue::from(Some(7.5)), MetricValue::Numeric(7.5));
        assert_eq!(MetricValue::from(Some(f64::NAN)), MetricValue::Missing);
        assert_eq!(MetricValue::from(None::<f64>), MetricValue::Missing);
        assert_eq!(MetricValue::from(Some(true)), MetricValue::Boolean(true));
        assert_eq!(MetricValue::Numeric(3.0).as_bool(), None);
        assert_eq!(MetricValue::Boolean(false).as_bool(), Some(false));
    }

    #[test]
    fn test_record_serializes_values_untagged() {
        let mut record = DailyMetricRecord::empty(date(2024, 1, 15));
        record.values.insert("mood".into(), MetricValue::Numeric(7.0));
        record.values.insert("sunnyDay".into(), MetricValue::Boolean(true));
        record.values.insert("stress".into(), MetricValue::Missing);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2024-01-15\""));
        assert!(json.contains("\"mood\":7.0"));
        assert!(json.contains("\"sunnyDay\":true"));
        assert!(json.contains("\"stress\":null"));
        assert_eq!(record.present_count(), 2);
        assert_eq!(record.get("unknown"), MetricValue::Missing);
    }
}
