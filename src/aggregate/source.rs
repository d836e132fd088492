//! Raw per-day source tables
//!
//! The aggregator reads six independent tables. A `DailySource` serves the
//! raw rows for each, restricted to a date range; it does not align dates
//! across tables.

use super::error::SourceError;
use super::types::DateRange;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Rows that belong to a calendar day
pub trait DatedRow {
    fn date(&self) -> NaiveDate;
}

/// Sleep tracker and focus log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepRow {
    pub date: NaiveDate,
    #[serde(default)]
    pub sleep_score: Option<f64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub focus_minutes: Option<f64>,
}

/// Daily ritual check-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RitualRow {
    pub date: NaiveDate,
    #[serde(default)]
    pub meditation: Option<bool>,
    #[serde(default)]
    pub journaling: Option<bool>,
    #[serde(default)]
    pub screens_off_before_bed: Option<bool>,
}

/// How a coffee was brewed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BrewType {
    Espresso,
    Drip,
    PourOver,
    FrenchPress,
    ColdBrew,
    Instant,
    Decaf,
}

impl BrewType {
    /// Typical caffeine content in mg per ml
    pub fn caffeine_mg_per_ml(&self) -> f64 {
        match self {
            BrewType::Espresso => 2.12,
            BrewType::Drip => 0.40,
            BrewType::PourOver => 0.46,
            BrewType::FrenchPress => 0.45,
            BrewType::ColdBrew => 0.65,
            BrewType::Instant => 0.26,
            BrewType::Decaf => 0.01,
        }
    }
}

/// One logged coffee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoffeeEntry {
    pub consumed_at: NaiveDateTime,
    pub brew_type: BrewType,
    pub volume_ml: f64,
}

impl CoffeeEntry {
    /// Estimated caffeine in mg
    pub fn caffeine_mg(&self) -> f64 {
        self.volume_ml * self.brew_type.caffeine_mg_per_ml()
    }

    /// Logged at or after 14:00
    pub fn is_afternoon(&self) -> bool {
        self.consumed_at.hour() >= 14
    }
}

/// Kind of workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Run,
    Strength,
    Cycling,
    Yoga,
    Other,
}

/// One logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRow {
    pub date: NaiveDate,
    pub kind: WorkoutKind,
    pub duration_min: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// One weather observation (several per day are averaged)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub cloud_cover_pct: Option<f64>,
    #[serde(default)]
    pub precipitation_mm: Option<f64>,
}

/// Subjective 1-10 ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingRow {
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Option<f64>,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub stress: Option<f64>,
}

impl DatedRow for SleepRow {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRow for RitualRow {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRow for CoffeeEntry {
    fn date(&self) -> NaiveDate {
        self.consumed_at.date()
    }
}

impl DatedRow for WorkoutRow {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRow for WeatherObservation {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRow for RatingRow {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Provider of raw per-day rows, one method per table
#[async_trait]
pub trait DailySource: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn fetch_sleep(&self, range: DateRange) -> Result<Vec<SleepRow>, SourceError>;

    async fn fetch_rituals(&self, range: DateRange) -> Result<Vec<RitualRow>, SourceError>;

    async fn fetch_coffee(&self, range: DateRange) -> Result<Vec<CoffeeEntry>, SourceError>;

    async fn fetch_workouts(&self, range: DateRange) -> Result<Vec<WorkoutRow>, SourceError>;

    async fn fetch_weather(&self, range: DateRange)
        -> Result<Vec<WeatherObservation>, SourceError>;

    async fn fetch_ratings(&self, range: DateRange) -> Result<Vec<RatingRow>, SourceError>;
}

/// Keep only rows dated within the range
pub fn within<T: DatedRow + Clone>(rows: &[T], range: DateRange) -> Vec<T> {
    rows.iter()
        .filter(|row| range.contains(row.date()))
        .cloned()
        .collect()
}

/// In-memory source, mainly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub sleep: Vec<SleepRow>,
    pub rituals: Vec<RitualRow>,
    pub coffee: Vec<CoffeeEntry>,
    pub workouts: Vec<WorkoutRow>,
    pub weather: Vec<WeatherObservation>,
    pub ratings: Vec<RatingRow>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sleep(mut self, rows: Vec<SleepRow>) -> Self {
        self.sleep = rows;
        self
    }

    pub fn with_rituals(mut self, rows: Vec<RitualRow>) -> Self {
        self.rituals = rows;
        self
    }

    pub fn with_coffee(mut self, rows: Vec<CoffeeEntry>) -> Self {
        self.coffee = rows;
        self
    }

    pub fn with_workouts(mut self, rows: Vec<WorkoutRow>) -> Self {
        self.workouts = rows;
        self
    }

    pub fn with_weather(mut self, rows: Vec<WeatherObservation>) -> Self {
        self.weather = rows;
        self
    }

    pub fn with_ratings(mut self, rows: Vec<RatingRow>) -> Self {
        self.ratings = rows;
        self
    }
}

#[async_trait]
impl DailySource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_sleep(&self, range: DateRange) -> Result<Vec<SleepRow>, SourceError> {
        Ok(within(&self.sleep, range))
    }

    async fn fetch_rituals(&self, range: DateRange) -> Result<Vec<RitualRow>, SourceError> {
        Ok(within(&self.rituals, range))
    }

    async fn fetch_coffee(&self, range: DateRange) -> Result<Vec<CoffeeEntry>, SourceError> {
        Ok(within(&self.coffee, range))
    }

    async fn fetch_workouts(&self, range: DateRange) -> Result<Vec<WorkoutRow>, SourceError> {
        Ok(within(&self.workouts, range))
    }

    async fn fetch_weather(
        &self,
        range: DateRange,
    ) -> Result<Vec<WeatherObservation>, SourceError> {
        Ok(within(&self.weather, range))
    }

    async fn fetch_ratings(&self, range: DateRange) -> Result<Vec<RatingRow>, SourceError> {
        Ok(within(&self.ratings, range))
    }
}
