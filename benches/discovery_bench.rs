//! Benchmarks for correlation discovery
//!
//! Run with: cargo bench

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use daylens::aggregate::*;
use daylens::catalog::MetricCatalog;
use daylens::discovery::{DiscoveryEngine, DiscoveryOptions};
use daylens::stats::{pearson_correlation, point_biserial_correlation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

fn create_source(days: u32) -> MemorySource {
    let mut rng = StdRng::seed_from_u64(7);
    let start = end_date() - Days::new(days as u64);

    let mut source = MemorySource::new();
    for k in 0..=days as u64 {
        let date = start + Days::new(k);

        source.sleep.push(SleepRow {
            date,
            sleep_score: Some(rng.gen_range(55.0..95.0)),
            sleep_hours: Some(rng.gen_range(5.0..9.0)),
            focus_minutes: Some(rng.gen_range(30.0..300.0)),
        });
        source.rituals.push(RitualRow {
            date,
            meditation: Some(rng.gen_bool(0.5)),
            journaling: Some(rng.gen_bool(0.4)),
            screens_off_before_bed: Some(rng.gen_bool(0.6)),
        });
        for cup in 0..rng.gen_range(0..4u32) {
            source.coffee.push(CoffeeEntry {
                consumed_at: date.and_hms_opt(8 + cup * 3, 0, 0).unwrap(),
                brew_type: BrewType::Drip,
                volume_ml: rng.gen_range(150.0..350.0),
            });
        }
        if rng.gen_bool(0.4) {
            source.workouts.push(WorkoutRow {
                date,
                kind: WorkoutKind::Run,
                duration_min: rng.gen_range(20.0..70.0),
                distance_km: Some(rng.gen_range(3.0..12.0)),
            });
        }
        source.weather.push(WeatherObservation {
            date,
            temperature_c: Some(rng.gen_range(-5.0..30.0)),
            cloud_cover_pct: Some(rng.gen_range(0.0..100.0)),
            precipitation_mm: Some(rng.gen_range(0.0..10.0)),
        });
        source.ratings.push(RatingRow {
            date,
            mood: Some(rng.gen_range(1.0..10.0)),
            energy: Some(rng.gen_range(1.0..10.0)),
            stress: Some(rng.gen_range(1.0..10.0)),
        });
    }
    source
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let mut rng = StdRng::seed_from_u64(11);

    for size in [30, 90, 365] {
        let x: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..100.0)).collect();
        let y: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..100.0)).collect();
        let flags: Vec<bool> = (0..size).map(|_| rng.gen_bool(0.5)).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("pearson_{}", size), |b| {
            b.iter(|| pearson_correlation(black_box(&x), black_box(&y)))
        });

        group.bench_function(format!("point_biserial_{}", size), |b| {
            b.iter(|| point_biserial_correlation(black_box(&flags), black_box(&y)))
        });
    }

    group.finish();
}

fn bench_discovery(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let catalog = Arc::new(MetricCatalog::builtin().unwrap());

    let mut group = c.benchmark_group("discovery");

    for days in [90u32, 365] {
        let engine = DiscoveryEngine::new(Arc::new(create_source(days)), Arc::clone(&catalog));
        let options = DiscoveryOptions::new().days(days).end_date(end_date());

        group.bench_with_input(BenchmarkId::new("sequential", days), &options, |b, options| {
            b.iter(|| rt.block_on(engine.discover(black_box(options))).unwrap())
        });

        let parallel = options.clone().parallel(true);
        group.bench_with_input(BenchmarkId::new("parallel", days), &parallel, |b, options| {
            b.iter(|| rt.block_on(engine.discover(black_box(options))).unwrap())
        });
    }

    group.bench_function("aggregate_365", |b| {
        let aggregator = DailyAggregator::new(Arc::new(create_source(365)), Arc::clone(&catalog));
        let range = DateRange::ending_on(end_date(), 365).unwrap();

        b.iter(|| rt.block_on(aggregator.fetch_daily_metrics(black_box(range))).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_discovery);
criterion_main!(benches);
