//! Discovery Engine
//!
//! Exhaustive pairwise search over the metric catalog:
//!
//! 1. aggregate one record per day over the window
//! 2. lay the records out as one value column per catalog metric
//! 3. enumerate unordered pairs, skipping boolean×boolean and obvious pairs
//! 4. align each pair on days where both values are present
//! 5. Pearson for two continuous metrics, point-biserial when one is boolean
//! 6. keep pairs passing the p-value and |r| thresholds, then interpret and sort
//!
//! Pair evaluation is independent per pair and can run on the rayon pool.

use super::error::{DiscoveryError, DiscoveryResult};
use super::exclusions::is_excluded;
use super::interpret::interpret;
use super::types::{analysis_window, DiscoveredCorrelation, DiscoveryOptions};
use crate::aggregate::{
    DailyAggregator, DailyMetricRecord, DailySource, DateRange, MetricValue, MINIMUM_SAMPLE_SIZE,
};
use crate::catalog::{MetricCatalog, MetricDefinition};
use crate::stats::{pearson_correlation, point_biserial_correlation, CorrelationResult};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Findings whose p-values are within this of each other are ordered by |r|
pub const P_VALUE_TIE_WINDOW: f64 = 0.001;

/// Searches the catalog for correlated metric pairs
pub struct DiscoveryEngine {
    aggregator: DailyAggregator,
}

impl DiscoveryEngine {
    /// Create an engine over a source and catalog
    pub fn new(source: Arc<dyn DailySource>, catalog: Arc<MetricCatalog>) -> Self {
        Self::from_aggregator(DailyAggregator::new(source, catalog))
    }

    pub fn from_aggregator(aggregator: DailyAggregator) -> Self {
        Self { aggregator }
    }

    pub fn catalog(&self) -> &MetricCatalog {
        self.aggregator.catalog()
    }

    pub fn aggregator(&self) -> &DailyAggregator {
        &self.aggregator
    }

    /// Find every significant, non-trivial correlation in the window
    ///
    /// Results are sorted by p-value ascending, with near-tied p-values
    /// ordered by |r| descending.
    pub async fn discover(
        &self,
        options: &DiscoveryOptions,
    ) -> DiscoveryResult<Vec<DiscoveredCorrelation>> {
        options.validate()?;
        let selected = self.select_metrics(options.metrics_to_analyze.as_deref())?;
        self.search(options, &selected, None).await
    }

    /// Like `discover`, restricted to pairs involving one metric
    ///
    /// `metrics_to_analyze`, when set, limits the partners considered.
    pub async fn correlations_for_metric(
        &self,
        metric_key: &str,
        options: &DiscoveryOptions,
    ) -> DiscoveryResult<Vec<DiscoveredCorrelation>> {
        options.validate()?;
        let focus = self.catalog().index_of(metric_key).ok_or_else(|| {
            DiscoveryError::InvalidOptions(format!("unknown metric '{metric_key}'"))
        })?;

        let mut selected = self.select_metrics(options.metrics_to_analyze.as_deref())?;
        if let Err(pos) = selected.binary_search(&focus) {
            selected.insert(pos, focus);
        }

        self.search(options, &selected, Some(focus)).await
    }

    /// Correlation between two named metrics over the last `days` days
    ///
    /// Thresholds and the obvious-pair list do not apply. Returns None for
    /// unknown keys, identical keys, two boolean metrics and samples below
    /// the minimum size.
    pub async fn correlation_between(
        &self,
        metric_a: &str,
        metric_b: &str,
        days: u32,
    ) -> DiscoveryResult<Option<DiscoveredCorrelation>> {
        self.correlation_between_ending(metric_a, metric_b, days, None)
            .await
    }

    /// `correlation_between` over a window ending on `end_date`
    pub async fn correlation_between_ending(
        &self,
        metric_a: &str,
        metric_b: &str,
        days: u32,
        end_date: Option<NaiveDate>,
    ) -> DiscoveryResult<Option<DiscoveredCorrelation>> {
        if days == 0 {
            return Err(DiscoveryError::InvalidOptions(
                "days must be at least 1".to_string(),
            ));
        }

        let catalog = self.catalog();
        let (Some(i), Some(j)) = (catalog.index_of(metric_a), catalog.index_of(metric_b)) else {
            tracing::debug!(metric_a, metric_b, "Unknown metric in pair lookup");
            return Ok(None);
        };
        if i == j {
            return Ok(None);
        }

        let window = self.load_window(analysis_window(days, end_date)?).await?;
        let finding = window
            .measure(i, j)
            .and_then(|result| window.finding(i, j, result));

        tracing::debug!(
            metric_a,
            metric_b,
            range = %window.range,
            found = finding.is_some(),
            "Pair lookup"
        );

        Ok(finding)
    }

    /// Catalog indices to analyse, ascending and deduplicated
    fn select_metrics(&self, keys: Option<&[String]>) -> DiscoveryResult<Vec<usize>> {
        let catalog = self.catalog();
        let Some(keys) = keys else {
            return Ok((0..catalog.len()).collect());
        };

        let mut indices = keys
            .iter()
            .map(|key| {
                catalog.index_of(key).ok_or_else(|| {
                    DiscoveryError::InvalidOptions(format!("unknown metric '{key}'"))
                })
            })
            .collect::<DiscoveryResult<Vec<_>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    async fn load_window(&self, range: DateRange) -> DiscoveryResult<AnalysisWindow<'_>> {
        let records = self.aggregator.fetch_daily_metrics(range).await?;
        Ok(AnalysisWindow::new(self.catalog(), &records, range))
    }

    async fn search(
        &self,
        options: &DiscoveryOptions,
        selected: &[usize],
        focus: Option<usize>,
    ) -> DiscoveryResult<Vec<DiscoveredCorrelation>> {
        let range = options.range()?;
        let window = self.load_window(range).await?;

        let candidates: Vec<(usize, usize)> = candidate_pairs(self.catalog(), selected)
            .into_iter()
            .filter(|&(i, j)| focus.map_or(true, |f| i == f || j == f))
            .collect();

        let measure = |&(i, j): &(usize, usize)| window.measure(i, j).map(|result| (i, j, result));
        let measured: Vec<(usize, usize, CorrelationResult)> = if options.parallel {
            candidates.par_iter().filter_map(measure).collect()
        } else {
            candidates.iter().filter_map(measure).collect()
        };
        let measured_count = measured.len();

        let mut findings: Vec<DiscoveredCorrelation> = measured
            .into_iter()
            .filter(|(_, _, result)| passes_thresholds(result, options))
            .filter_map(|(i, j, result)| window.finding(i, j, result))
            .collect();
        sort_findings(&mut findings);

        for finding in &findings {
            tracing::debug!(
                metric_a = %finding.metric_a.key,
                metric_b = %finding.metric_b.key,
                r = finding.correlation.r,
                p_value = finding.correlation.p_value,
                n = finding.correlation.n,
                "Correlation found"
            );
        }

        tracing::info!(
            range = %range,
            metrics = selected.len(),
            pairs = candidates.len(),
            measured = measured_count,
            findings = findings.len(),
            parallel = options.parallel,
            "Correlation discovery complete"
        );

        Ok(findings)
    }
}

/// Unordered pairs (i < j) of selected metrics that are worth testing
fn candidate_pairs(catalog: &MetricCatalog, selected: &[usize]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (pos, &i) in selected.iter().enumerate() {
        for &j in &selected[pos + 1..] {
            let (Some(a), Some(b)) = (catalog.get_by_index(i), catalog.get_by_index(j)) else {
                continue;
            };
            if a.is_boolean() && b.is_boolean() {
                continue;
            }
            if is_excluded(a, b) {
                tracing::trace!(metric_a = %a.key, metric_b = %b.key, "Skipping obvious pair");
                continue;
            }
            pairs.push((i, j));
        }
    }
    pairs
}

fn passes_thresholds(result: &CorrelationResult, options: &DiscoveryOptions) -> bool {
    result.p_value <= options.p_value_threshold && result.r.abs() >= options.min_abs_r
}

/// Records laid out as one value column per catalog metric
struct AnalysisWindow<'a> {
    catalog: &'a MetricCatalog,
    range: DateRange,
    columns: Vec<Vec<MetricValue>>,
}

impl<'a> AnalysisWindow<'a> {
    fn new(catalog: &'a MetricCatalog, records: &[DailyMetricRecord], range: DateRange) -> Self {
        let columns = catalog
            .all()
            .iter()
            .map(|metric| records.iter().map(|r| r.get(&metric.key)).collect())
            .collect();
        Self {
            catalog,
            range,
            columns,
        }
    }

    /// Values of both metrics on days where neither is missing
    fn aligned(&self, i: usize, j: usize) -> Vec<(MetricValue, MetricValue)> {
        self.columns[i]
            .iter()
            .zip(&self.columns[j])
            .filter(|(a, b)| !a.is_missing() && !b.is_missing())
            .map(|(a, b)| (*a, *b))
            .collect()
    }

    /// Correlate one pair; None when it cannot be measured
    fn measure(&self, i: usize, j: usize) -> Option<CorrelationResult> {
        let a = self.catalog.get_by_index(i)?;
        let b = self.catalog.get_by_index(j)?;

        let sample = self.aligned(i, j);
        if sample.len() < MINIMUM_SAMPLE_SIZE {
            return None;
        }

        let result = correlate(&sample, a, b)?;
        (result.n >= MINIMUM_SAMPLE_SIZE).then_some(result)
    }

    fn finding(&self, i: usize, j: usize, result: CorrelationResult) -> Option<DiscoveredCorrelation> {
        let a = self.catalog.get_by_index(i)?;
        let b = self.catalog.get_by_index(j)?;
        Some(DiscoveredCorrelation {
            metric_a: a.clone(),
            metric_b: b.clone(),
            correlation: result,
            date_range: self.range,
            interpretation: interpret(a, b, &result),
        })
    }
}

/// Pick the statistic by metric type; None for two boolean metrics
///
/// Values whose type disagrees with the catalog unit are dropped.
fn correlate(
    sample: &[(MetricValue, MetricValue)],
    a: &MetricDefinition,
    b: &MetricDefinition,
) -> Option<CorrelationResult> {
    match (a.is_boolean(), b.is_boolean()) {
        (false, false) => {
            let (x, y): (Vec<f64>, Vec<f64>) = sample
                .iter()
                .filter_map(|pair| match *pair {
                    (MetricValue::Numeric(x), MetricValue::Numeric(y)) => Some((x, y)),
                    _ => None,
                })
                .unzip();
            Some(pearson_correlation(&x, &y))
        }
        (true, false) => Some(binary_vs_continuous(sample.iter().copied())),
        (false, true) => Some(binary_vs_continuous(sample.iter().map(|&(a, b)| (b, a)))),
        (true, true) => None,
    }
}

fn binary_vs_continuous(pairs: impl Iterator<Item = (MetricValue, MetricValue)>) -> CorrelationResult {
    let (flags, values): (Vec<bool>, Vec<f64>) = pairs
        .filter_map(|pair| match pair {
            (MetricValue::Boolean(flag), MetricValue::Numeric(value)) => Some((flag, value)),
            _ => None,
        })
        .unzip();
    point_biserial_correlation(&flags, &values)
}

/// Order by p-value, then metric keys
fn compare_p_values(a: &DiscoveredCorrelation, b: &DiscoveredCorrelation) -> Ordering {
    a.correlation
        .p_value
        .total_cmp(&b.correlation.p_value)
        .then_with(|| compare_keys(a, b))
}

fn compare_keys(a: &DiscoveredCorrelation, b: &DiscoveredCorrelation) -> Ordering {
    a.metric_a
        .key
        .cmp(&b.metric_a.key)
        .then_with(|| a.metric_b.key.cmp(&b.metric_b.key))
}

/// Order within a run of tied p-values
///
/// |r| descending, then exact p-value and metric keys.
pub fn compare_findings(a: &DiscoveredCorrelation, b: &DiscoveredCorrelation) -> Ordering {
    b.correlation
        .r
        .abs()
        .total_cmp(&a.correlation.r.abs())
        .then_with(|| compare_p_values(a, b))
}

/// Sort findings by p-value, strongest first among near ties
///
/// After sorting by p-value, each run of findings whose p-values lie within
/// `P_VALUE_TIE_WINDOW` of the run's first p-value is reordered with
/// `compare_findings`. The result depends only on the set of findings.
pub fn sort_findings(findings: &mut [DiscoveredCorrelation]) {
    findings.sort_by(compare_p_values);

    let mut start = 0;
    while start < findings.len() {
        let anchor = findings[start].correlation.p_value;
        let run = 1 + findings[start + 1..]
            .iter()
            .take_while(|f| f.correlation.p_value - anchor <= P_VALUE_TIE_WINDOW)
            .count();
        findings[start..start + run].sort_by(compare_findings);
        start += run;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{
        BrewType, CoffeeEntry, MemorySource, RatingRow, RitualRow, SleepRow, WeatherObservation,
        WorkoutKind, WorkoutRow,
    };
    use crate::catalog::keys::*;
    use crate::stats::Confidence;
    use chrono::Days;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    /// `days` days ending on `end`, plus the day before for lagged values
    ///
    /// Workouts every third day; sleep score drops by 15 the day after a
    /// workout. Coffee count cycles 1-4 espressos, all before noon.
    fn synthetic_source(end: NaiveDate, days: u32) -> MemorySource {
        let mut rng = StdRng::seed_from_u64(42);
        let start = end - Days::new(days as u64);

        let mut sleep = Vec::new();
        let mut rituals = Vec::new();
        let mut coffee = Vec::new();
        let mut workouts = Vec::new();
        let mut weather = Vec::new();
        let mut ratings = Vec::new();

        for k in 0..=days as u64 {
            let date = start + Days::new(k);
            let worked_out_yesterday = k > 0 && (k - 1) % 3 == 0;

            if k % 3 == 0 {
                workouts.push(WorkoutRow {
                    date,
                    kind: WorkoutKind::Run,
                    duration_min: 30.0 + (k % 5) as f64 * 5.0,
                    distance_km: Some(5.0 + (k % 5) as f64),
                });
            }

            let penalty = if worked_out_yesterday { 15.0 } else { 0.0 };
            let sleep_score = 82.0 - penalty + rng.gen_range(-3.0..3.0);
            sleep.push(SleepRow {
                date,
                sleep_score: Some(sleep_score),
                sleep_hours: Some(7.0 + rng.gen_range(-0.5..0.5)),
                focus_minutes: Some(rng.gen_range(60.0..240.0)),
            });

            for cup in 0..(k % 4) + 1 {
                coffee.push(CoffeeEntry {
                    consumed_at: date.and_hms_opt(7 + cup as u32, 0, 0).unwrap(),
                    brew_type: BrewType::Espresso,
                    volume_ml: 30.0,
                });
            }

            rituals.push(RitualRow {
                date,
                meditation: Some(rng.gen_bool(0.5)),
                journaling: Some(rng.gen_bool(0.3)),
                screens_off_before_bed: Some(rng.gen_bool(0.6)),
            });

            weather.push(WeatherObservation {
                date,
                temperature_c: Some(rng.gen_range(10.0..25.0)),
                cloud_cover_pct: Some(rng.gen_range(0.0..100.0)),
                precipitation_mm: Some(rng.gen_range(0.0..5.0)),
            });

            ratings.push(RatingRow {
                date,
                mood: Some(3.0 + sleep_score / 20.0 + rng.gen_range(-0.5..0.5)),
                energy: Some(rng.gen_range(3.0..8.0)),
                stress: Some(rng.gen_range(2.0..7.0)),
            });
        }

        MemorySource::new()
            .with_sleep(sleep)
            .with_rituals(rituals)
            .with_coffee(coffee)
            .with_workouts(workouts)
            .with_weather(weather)
            .with_ratings(ratings)
    }

    fn engine(days: u32) -> DiscoveryEngine {
        DiscoveryEngine::new(
            Arc::new(synthetic_source(end(), days)),
            Arc::new(MetricCatalog::builtin().unwrap()),
        )
    }

    fn options() -> DiscoveryOptions {
        DiscoveryOptions::new().days(90).end_date(end())
    }

    #[tokio::test]
    async fn test_finds_day_after_workout_effect() {
        let engine = engine(90);
        let findings = engine.discover(&options()).await.unwrap();

        let finding = findings
            .iter()
            .find(|f| f.is_pair(PREV_DAY_WORKOUT, SLEEP_SCORE))
            .expect("workout effect not found");

        assert!(finding.correlation.r < 0.0);
        assert!(finding.correlation.confidence >= Confidence::Exploratory);
        assert_eq!(finding.correlation.n, 90);
        assert_eq!(finding.date_range.end, end());
        assert!(finding
            .interpretation
            .starts_with("On days after a workout, sleep score tends to be lower."));
    }

    #[tokio::test]
    async fn test_findings_respect_thresholds_and_order() {
        let engine = engine(90);
        let options = options();
        let findings = engine.discover(&options).await.unwrap();

        assert!(!findings.is_empty());
        for finding in &findings {
            assert!(finding.correlation.p_value <= options.p_value_threshold);
            assert!(finding.correlation.r.abs() >= options.min_abs_r);
            assert!(finding.correlation.n >= MINIMUM_SAMPLE_SIZE);
            assert!(!(finding.metric_a.is_boolean() && finding.metric_b.is_boolean()));
            assert!(!is_excluded(&finding.metric_a, &finding.metric_b));
        }
        for pair in findings.windows(2) {
            assert!(pair[1].correlation.p_value >= pair[0].correlation.p_value - P_VALUE_TIE_WINDOW);
        }

        let mut resorted = findings.clone();
        resorted.reverse();
        sort_findings(&mut resorted);
        assert_eq!(resorted, findings);
    }

    #[tokio::test]
    async fn test_obvious_pairs_are_skipped_but_still_measurable() {
        let engine = engine(90);
        let findings = engine.discover(&options()).await.unwrap();

        assert!(!findings.iter().any(|f| f.is_pair(COFFEE_COUNT, TOTAL_CAFFEINE_MG)));
        assert!(!findings.iter().any(|f| f.is_pair(RUN_DISTANCE_KM, RUN_DURATION_MIN)));

        let direct = engine
            .correlation_between_ending(COFFEE_COUNT, TOTAL_CAFFEINE_MG, 90, Some(end()))
            .await
            .unwrap()
            .unwrap();
        assert!(direct.correlation.r > 0.999);
        assert_eq!(direct.metric_a.key, COFFEE_COUNT);
    }

    #[tokio::test]
    async fn test_short_window_yields_nothing() {
        let engine = engine(5);
        let options = DiscoveryOptions::new()
            .days(5)
            .end_date(end())
            .p_value_threshold(1.0)
            .min_abs_r(0.0);

        let findings = engine.discover(&options).await.unwrap();
        assert!(findings.is_empty());

        let direct = engine
            .correlation_between_ending(MOOD, SLEEP_SCORE, 5, Some(end()))
            .await
            .unwrap();
        assert!(direct.is_none());
    }

    #[tokio::test]
    async fn test_discover_is_deterministic() {
        let engine = engine(90);
        let first = engine.discover(&options()).await.unwrap();
        let second = engine.discover(&options()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_parallel_matches_sequential() {
        let engine = engine(90);
        let sequential = engine.discover(&options()).await.unwrap();
        let parallel = engine.discover(&options().parallel(true)).await.unwrap();
        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn test_metrics_to_analyze_limits_pairs() {
        let engine = engine(90);
        let keys = [SLEEP_SCORE, PREV_DAY_WORKOUT, MOOD];
        let findings = engine.discover(&options().metrics(keys)).await.unwrap();

        assert!(findings.iter().any(|f| f.is_pair(PREV_DAY_WORKOUT, SLEEP_SCORE)));
        for finding in &findings {
            assert!(keys.contains(&finding.metric_a.key.as_str()));
            assert!(keys.contains(&finding.metric_b.key.as_str()));
        }
    }

    #[tokio::test]
    async fn test_correlations_for_metric() {
        let engine = engine(90);
        let findings = engine
            .correlations_for_metric(SLEEP_SCORE, &options())
            .await
            .unwrap();

        assert!(findings.iter().all(|f| f.involves(SLEEP_SCORE)));
        assert!(findings.iter().any(|f| f.involves(PREV_DAY_WORKOUT)));

        let unknown = engine.correlations_for_metric("nope", &options()).await;
        assert!(matches!(unknown, Err(DiscoveryError::InvalidOptions(_))));
    }

    #[tokio::test]
    async fn test_pair_lookup_edge_cases() {
        let engine = engine(90);
        let lookup = |a: &'static str, b: &'static str| {
            engine.correlation_between_ending(a, b, 90, Some(end()))
        };

        assert!(lookup("nope", SLEEP_SCORE).await.unwrap().is_none());
        assert!(lookup(SLEEP_SCORE, SLEEP_SCORE).await.unwrap().is_none());
        assert!(lookup(WORKOUT, MEDITATION).await.unwrap().is_none());

        let found = lookup(SLEEP_SCORE, PREV_DAY_WORKOUT).await.unwrap().unwrap();
        assert!(found.correlation.r < -0.5);
    }

    #[tokio::test]
    async fn test_invalid_options_are_rejected() {
        let engine = engine(90);

        let zero_days = engine.discover(&options().days(0)).await;
        assert!(matches!(zero_days, Err(DiscoveryError::InvalidOptions(_))));

        let bad_threshold = engine.discover(&options().p_value_threshold(2.0)).await;
        assert!(matches!(bad_threshold, Err(DiscoveryError::InvalidOptions(_))));

        let unknown = engine.discover(&options().metrics(["nope"])).await;
        assert!(matches!(unknown, Err(DiscoveryError::InvalidOptions(_))));

        let lookup = engine.correlation_between(MOOD, SLEEP_SCORE, 0).await;
        assert!(matches!(lookup, Err(DiscoveryError::InvalidOptions(_))));
    }

    fn order(findings: &[DiscoveredCorrelation]) -> Vec<(&str, &str)> {
        findings
            .iter()
            .map(|f| (f.metric_a.key.as_str(), f.metric_b.key.as_str()))
            .collect()
    }

    fn test_finding(catalog: &MetricCatalog, a: &str, b: &str, r: f64, p: f64) -> DiscoveredCorrelation {
        DiscoveredCorrelation {
            metric_a: catalog.get(a).unwrap().clone(),
            metric_b: catalog.get(b).unwrap().clone(),
            correlation: CorrelationResult::new(r, p, 30),
            date_range: DateRange::ending_on(end(), 30).unwrap(),
            interpretation: String::new(),
        }
    }

    #[test]
    fn test_sort_p_value_then_strength() {
        let catalog = MetricCatalog::builtin().unwrap();
        let finding = |a: &str, b: &str, r: f64, p: f64| test_finding(&catalog, a, b, r, p);

        let mut findings = vec![
            finding(MOOD, ENERGY, 0.9, 0.02),
            finding(MOOD, STRESS, 0.4, 0.0101),
            finding(SLEEP_SCORE, MOOD, 0.6, 0.0105),
            finding(SLEEP_SCORE, ENERGY, 0.3, 0.002),
        ];
        sort_findings(&mut findings);

        assert_eq!(
            order(&findings),
            vec![
                (SLEEP_SCORE, ENERGY),
                (SLEEP_SCORE, MOOD),
                (MOOD, STRESS),
                (MOOD, ENERGY),
            ]
        );
    }

    #[test]
    fn test_near_tied_p_values_across_a_round_boundary() {
        let catalog = MetricCatalog::builtin().unwrap();
        let mut findings = vec![
            test_finding(&catalog, MOOD, ENERGY, 0.35, 0.0099),
            test_finding(&catalog, MOOD, STRESS, 0.9, 0.0101),
        ];
        sort_findings(&mut findings);

        assert_eq!(order(&findings), vec![(MOOD, STRESS), (MOOD, ENERGY)]);
    }

    #[test]
    fn test_tie_runs_are_anchored_on_their_first_p_value() {
        let catalog = MetricCatalog::builtin().unwrap();
        let mut findings = vec![
            test_finding(&catalog, SLEEP_SCORE, MOOD, 0.9, 0.0115),
            test_finding(&catalog, MOOD, STRESS, 0.5, 0.0108),
            test_finding(&catalog, MOOD, ENERGY, 0.3, 0.0100),
        ];
        sort_findings(&mut findings);

        // 0.0115 is more than the window past the run's first p-value
        assert_eq!(
            order(&findings),
            vec![(MOOD, STRESS), (MOOD, ENERGY), (SLEEP_SCORE, MOOD)]
        );
    }

    #[test]
    fn test_candidate_pairs_skip_boolean_pairs_and_obvious_pairs() {
        let catalog = MetricCatalog::builtin().unwrap();
        let selected: Vec<usize> = (0..catalog.len()).collect();
        let pairs = candidate_pairs(&catalog, &selected);

        let total = catalog.len() * (catalog.len() - 1) / 2;
        assert!(pairs.len() < total);
        for &(i, j) in &pairs {
            assert!(i < j);
            let a = catalog.get_by_index(i).unwrap();
            let b = catalog.get_by_index(j).unwrap();
            assert!(!(a.is_boolean() && b.is_boolean()));
            assert!(!is_excluded(a, b));
        }
    }
}
