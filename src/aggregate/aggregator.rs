//! Daily Metric Aggregator
//!
//! Turns the six raw source tables into exactly one `DailyMetricRecord` per
//! calendar day:
//!
//! ```text
//! dates(range) ──┬── sleep    ─┐
//!                ├── rituals   │
//!                ├── coffee    ├─ left join on date ─→ shift lagged keys ─→ records
//!                ├── workouts  │
//!                ├── weather   │
//!                └── ratings  ─┘
//! ```
//!
//! Alignment only; no analysis happens here.

use super::error::{AggregateError, AggregateResult};
use super::source::*;
use super::types::{DailyMetricRecord, DateRange, MetricValue};
use crate::catalog::keys::*;
use crate::catalog::MetricCatalog;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Smallest aligned sample any correlation is computed on
///
/// A fixed policy floor against spurious findings on tiny windows, not a
/// statistically derived value.
pub const MINIMUM_SAMPLE_SIZE: usize = 10;

/// Cloud cover (percent) below which a day counts as sunny
pub const SUNNY_CLOUD_COVER_PCT: f64 = 30.0;

/// Shared minimum sample size policy
pub fn minimum_sample_size() -> usize {
    MINIMUM_SAMPLE_SIZE
}

/// Values produced per day before catalog selection
type DayValues = HashMap<&'static str, MetricValue>;

/// Per-day values produced by one source table
type TableValues = BTreeMap<NaiveDate, Vec<(&'static str, MetricValue)>>;

/// Builds aligned daily records from a `DailySource`
pub struct DailyAggregator {
    source: Arc<dyn DailySource>,
    catalog: Arc<MetricCatalog>,
}

impl DailyAggregator {
    /// Create a new aggregator
    pub fn new(source: Arc<dyn DailySource>, catalog: Arc<MetricCatalog>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &Arc<MetricCatalog> {
        &self.catalog
    }

    /// Fetch one record per date in `range`, ascending
    ///
    /// Every catalog key is present in every record; absent data is
    /// `MetricValue::Missing`. One extra day before `range.start` is fetched
    /// so previous-day metrics are filled on the first record.
    pub async fn fetch_daily_metrics(
        &self,
        range: DateRange,
    ) -> AggregateResult<Vec<DailyMetricRecord>> {
        if range.start > range.end {
            return Err(AggregateError::InvalidRange(range.to_string()));
        }
        let fetch_range = range
            .extend_back(1)
            .ok_or_else(|| AggregateError::OutOfBounds(range.to_string()))?;

        let source = &self.source;
        let (sleep, rituals, coffee, workouts, weather, ratings) = tokio::try_join!(
            source.fetch_sleep(fetch_range),
            source.fetch_rituals(fetch_range),
            source.fetch_coffee(fetch_range),
            source.fetch_workouts(fetch_range),
            source.fetch_weather(fetch_range),
            source.fetch_ratings(fetch_range),
        )?;

        tracing::debug!(
            source = source.name(),
            range = %range,
            sleep = sleep.len(),
            rituals = rituals.len(),
            coffee = coffee.len(),
            workouts = workouts.len(),
            weather = weather.len(),
            ratings = ratings.len(),
            "Fetched raw daily rows"
        );

        let mut produced: BTreeMap<NaiveDate, DayValues> =
            fetch_range.dates().map(|d| (d, DayValues::new())).collect();

        merge(&mut produced, aggregate_sleep(&sleep));
        merge(&mut produced, aggregate_rituals(&rituals));
        merge(&mut produced, aggregate_coffee(&coffee));
        merge(&mut produced, aggregate_workouts(&workouts, fetch_range));
        merge(&mut produced, aggregate_weather(&weather));
        merge(&mut produced, aggregate_ratings(&ratings));

        let lag_sources: HashMap<usize, usize> = self.catalog.lagged_pairs().into_iter().collect();
        let records: Vec<DailyMetricRecord> = range
            .dates()
            .map(|date| self.build_record(date, &produced, &lag_sources))
            .collect();

        tracing::debug!(
            days = records.len(),
            metrics = self.catalog.len(),
            empty_days = records.iter().filter(|r| r.present_count() == 0).count(),
            "Aligned daily records"
        );

        Ok(records)
    }

    /// Select catalog values for one date, shifting lagged keys by a day
    ///
    /// `lag_sources` maps a lagged metric's index to its source metric's index.
    fn build_record(
        &self,
        date: NaiveDate,
        produced: &BTreeMap<NaiveDate, DayValues>,
        lag_sources: &HashMap<usize, usize>,
    ) -> DailyMetricRecord {
        let lookup = |day: Option<NaiveDate>, key: &str| -> MetricValue {
            day.and_then(|d| produced.get(&d))
                .and_then(|values| values.get(key))
                .copied()
                .unwrap_or_default()
        };

        let mut record = DailyMetricRecord::empty(date);
        for (idx, metric) in self.catalog.all().iter().enumerate() {
            let value = match lag_sources.get(&idx).and_then(|&src| self.catalog.get_by_index(src)) {
                Some(source) => lookup(date.pred_opt(), source.key.as_str()),
                None => lookup(Some(date), metric.key.as_str()),
            };
            record.values.insert(metric.key.clone(), value);
        }
        record
    }
}

fn merge(produced: &mut BTreeMap<NaiveDate, DayValues>, table: TableValues) {
    for (date, values) in table {
        // Rows outside the fetch window were filtered by the source
        if let Some(day) = produced.get_mut(&date) {
            day.extend(values);
        }
    }
}

fn group_by_date<T: DatedRow>(rows: &[T]) -> BTreeMap<NaiveDate, Vec<&T>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&T>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.date()).or_default().push(row);
    }
    groups
}

fn mean_of(values: impl Iterator<Item = Option<f64>>) -> MetricValue {
    let (sum, count) = values
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        MetricValue::Missing
    } else {
        MetricValue::Numeric(sum / count as f64)
    }
}

fn sum_of(values: impl Iterator<Item = Option<f64>>) -> MetricValue {
    let (sum, count) = values
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        MetricValue::Missing
    } else {
        MetricValue::Numeric(sum)
    }
}

/// Any true -> true, otherwise any false -> false, otherwise missing
fn any_of(values: impl Iterator<Item = Option<bool>>) -> MetricValue {
    values
        .flatten()
        .fold(MetricValue::Missing, |acc, v| match (acc, v) {
            (MetricValue::Boolean(true), _) | (_, true) => MetricValue::Boolean(true),
            _ => MetricValue::Boolean(false),
        })
}

fn aggregate_sleep(rows: &[SleepRow]) -> TableValues {
    group_by_date(rows)
        .into_iter()
        .map(|(date, day)| {
            let values = vec![
                (SLEEP_SCORE, mean_of(day.iter().map(|r| r.sleep_score))),
                (SLEEP_HOURS, mean_of(day.iter().map(|r| r.sleep_hours))),
                (FOCUS_MINUTES, mean_of(day.iter().map(|r| r.focus_minutes))),
            ];
            (date, values)
        })
        .collect()
}

fn aggregate_rituals(rows: &[RitualRow]) -> TableValues {
    group_by_date(rows)
        .into_iter()
        .map(|(date, day)| {
            let values = vec![
                (MEDITATION, any_of(day.iter().map(|r| r.meditation))),
                (JOURNALING, any_of(day.iter().map(|r| r.journaling))),
                (
                    SCREENS_OFF_BEFORE_BED,
                    any_of(day.iter().map(|r| r.screens_off_before_bed)),
                ),
            ];
            (date, values)
        })
        .collect()
}

fn aggregate_coffee(rows: &[CoffeeEntry]) -> TableValues {
    group_by_date(rows)
        .into_iter()
        .map(|(date, day)| {
            let values = vec![
                (COFFEE_COUNT, MetricValue::Numeric(day.len() as f64)),
                (
                    TOTAL_CAFFEINE_MG,
                    sum_of(day.iter().map(|c| Some(c.caffeine_mg()))),
                ),
                (
                    AFTERNOON_COFFEE,
                    MetricValue::Boolean(day.iter().any(|c| c.is_afternoon())),
                ),
            ];
            (date, values)
        })
        .collect()
}

/// The workout log is authoritative about rest days: every date in the
/// window gets a `workout` flag, false when nothing was logged.
fn aggregate_workouts(
    rows: &[WorkoutRow],
    window: DateRange,
) -> TableValues {
    let groups = group_by_date(rows);

    window
        .dates()
        .map(|date| {
            let values = match groups.get(&date) {
                None => vec![(WORKOUT, MetricValue::Boolean(false))],
                Some(day) => {
                    let runs: Vec<&&WorkoutRow> =
                        day.iter().filter(|w| w.kind == WorkoutKind::Run).collect();
                    vec![
                        (WORKOUT, MetricValue::Boolean(true)),
                        (
                            WORKOUT_MINUTES,
                            sum_of(day.iter().map(|w| Some(w.duration_min))),
                        ),
                        (RUN_DISTANCE_KM, sum_of(runs.iter().map(|w| w.distance_km))),
                        (
                            RUN_DURATION_MIN,
                            sum_of(runs.iter().map(|w| Some(w.duration_min))),
                        ),
                    ]
                }
            };
            (date, values)
        })
        .collect()
}

fn aggregate_weather(rows: &[WeatherObservation]) -> TableValues {
    group_by_date(rows)
        .into_iter()
        .map(|(date, day)| {
            let cloud = mean_of(day.iter().map(|w| w.cloud_cover_pct));
            let sunny = match cloud {
                MetricValue::Numeric(pct) => MetricValue::Boolean(pct < SUNNY_CLOUD_COVER_PCT),
                _ => MetricValue::Missing,
            };
            let values = vec![
                (AVG_TEMPERATURE_C, mean_of(day.iter().map(|w| w.temperature_c))),
                (AVG_CLOUD_COVER, cloud),
                (PRECIPITATION_MM, sum_of(day.iter().map(|w| w.precipitation_mm))),
                (SUNNY_DAY, sunny),
            ];
            (date, values)
        })
        .collect()
}

fn aggregate_ratings(rows: &[RatingRow]) -> TableValues {
    group_by_date(rows)
        .into_iter()
        .map(|(date, day)| {
            let values = vec![
                (MOOD, mean_of(day.iter().map(|r| r.mood))),
                (ENERGY, mean_of(day.iter().map(|r| r.energy))),
                (STRESS, mean_of(day.iter().map(|r| r.stress))),
            ];
            (date, values)
        })
        .collect()
}

/// Dates and numeric values of one metric, skipping missing and boolean days
pub fn extract_metric_values(
    records: &[DailyMetricRecord],
    metric_key: &str,
) -> (Vec<NaiveDate>, Vec<f64>) {
    records
        .iter()
        .filter_map(|r| r.get(metric_key).as_f64().map(|v| (r.date, v)))
        .unzip()
}

/// Univariate summary of a numeric metric
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricSummary {
    pub key: String,
    /// Days with a value
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Summarize a numeric metric; None when it has no values
pub fn summarize_metric(records: &[DailyMetricRecord], metric_key: &str) -> Option<MetricSummary> {
    let (dates, values) = extract_metric_values(records, metric_key);
    let first_date = *dates.first()?;
    let last_date = *dates.last()?;

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    Some(MetricSummary {
        key: metric_key.to_string(),
        count,
        mean,
        min: values.iter().cloned().fold(f64::INFINITY, f64::min),
        max: values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        std_dev: variance.sqrt(),
        first_date,
        last_date,
    })
}
