//! CSV Source
//!
//! Reads each table from its own CSV file in a data directory:
//!
//! | file           | row type             |
//! |----------------|----------------------|
//! | `sleep.csv`    | `SleepRow`           |
//! | `rituals.csv`  | `RitualRow`          |
//! | `coffee.csv`   | `CoffeeEntry`        |
//! | `workouts.csv` | `WorkoutRow`         |
//! | `weather.csv`  | `WeatherObservation` |
//! | `ratings.csv`  | `RatingRow`          |
//!
//! Headers name the row fields. Empty cells are missing values. A missing
//! file is an empty table; malformed rows are skipped and logged. Files are
//! parsed on tokio's blocking pool, so the aggregator's six fetches overlap.

use super::error::SourceError;
use super::source::*;
use super::types::DateRange;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const SLEEP_FILE: &str = "sleep.csv";
pub const RITUALS_FILE: &str = "rituals.csv";
pub const COFFEE_FILE: &str = "coffee.csv";
pub const WORKOUTS_FILE: &str = "workouts.csv";
pub const WEATHER_FILE: &str = "weather.csv";
pub const RATINGS_FILE: &str = "ratings.csv";

/// Directory of per-table CSV files
#[derive(Debug, Clone)]
pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read one table on the blocking pool, keeping rows within the range
    async fn read_table<T>(&self, file: &'static str, range: DateRange) -> Result<Vec<T>, SourceError>
    where
        T: DeserializeOwned + DatedRow + Send + 'static,
    {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || read_csv_table(&dir, file, range))
            .await
            .map_err(|e| SourceError::Unavailable(format!("reading {file} failed: {e}")))?
    }
}

/// Synchronous CSV read of one table file
fn read_csv_table<T>(dir: &Path, file: &str, range: DateRange) -> Result<Vec<T>, SourceError>
where
    T: DeserializeOwned + DatedRow,
{
    let path = dir.join(file);
    if !path.exists() {
        tracing::debug!(table = file, dir = ?dir, "Table file not found, treating as empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(&path)
        .map_err(|e| SourceError::Csv {
            table: file.to_string(),
            error: e.to_string(),
        })?;

    let mut rows = Vec::new();
    let mut rows_failed = 0usize;

    for (line_num, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => {
                if range.contains(row.date()) {
                    rows.push(row);
                }
            }
            Err(e) => {
                rows_failed += 1;
                // Header is line 1
                tracing::warn!(table = file, line = line_num + 2, error = %e, "Skipping malformed row");
            }
        }
    }

    tracing::debug!(
        table = file,
        rows = rows.len(),
        rows_failed,
        range = %range,
        "Read CSV table"
    );

    Ok(rows)
}

#[async_trait]
impl DailySource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    async fn fetch_sleep(&self, range: DateRange) -> Result<Vec<SleepRow>, SourceError> {
        self.read_table(SLEEP_FILE, range).await
    }

    async fn fetch_rituals(&self, range: DateRange) -> Result<Vec<RitualRow>, SourceError> {
        self.read_table(RITUALS_FILE, range).await
    }

    async fn fetch_coffee(&self, range: DateRange) -> Result<Vec<CoffeeEntry>, SourceError> {
        self.read_table(COFFEE_FILE, range).await
    }

    async fn fetch_workouts(&self, range: DateRange) -> Result<Vec<WorkoutRow>, SourceError> {
        self.read_table(WORKOUTS_FILE, range).await
    }

    async fn fetch_weather(
        &self,
        range: DateRange,
    ) -> Result<Vec<WeatherObservation>, SourceError> {
        self.read_table(WEATHER_FILE, range).await
    }

    async fn fetch_ratings(&self, range: DateRange) -> Result<Vec<RatingRow>, SourceError> {
        self.read_table(RATINGS_FILE, range).await
    }
}
