//! Built-in metric table
//!
//! Every metric the aggregator knows how to produce, plus the previous-day
//! variants used for day-over-day findings.

use super::keys::*;
use super::types::MetricDefinition;

/// (key, label, description, unit)
const DEFAULT_METRICS: &[(&str, &str, &str, &str)] = &[
    // Sleep and focus
    (SLEEP_SCORE, "Sleep Score", "sleep score", "points"),
    (SLEEP_HOURS, "Sleep Duration", "hours slept", "hours"),
    (FOCUS_MINUTES, "Focus Time", "focused work time", "minutes"),
    // Rituals
    (MEDITATION, "Meditation", "you meditated", "boolean"),
    (JOURNALING, "Journaling", "you journaled", "boolean"),
    (
        SCREENS_OFF_BEFORE_BED,
        "Screens Off Before Bed",
        "screens were off before bed",
        "boolean",
    ),
    // Coffee
    (COFFEE_COUNT, "Coffees", "the number of coffees", "cups"),
    (TOTAL_CAFFEINE_MG, "Caffeine", "caffeine intake", "mg"),
    (
        AFTERNOON_COFFEE,
        "Afternoon Coffee",
        "you had coffee after 2pm",
        "boolean",
    ),
    // Exercise
    (WORKOUT, "Workout", "you worked out", "boolean"),
    (WORKOUT_MINUTES, "Workout Time", "workout time", "minutes"),
    (RUN_DISTANCE_KM, "Run Distance", "running distance", "km"),
    (RUN_DURATION_MIN, "Run Duration", "running time", "minutes"),
    // Weather
    (AVG_TEMPERATURE_C, "Temperature", "temperature", "celsius"),
    (AVG_CLOUD_COVER, "Cloud Cover", "cloud cover", "percent"),
    (PRECIPITATION_MM, "Precipitation", "rainfall", "mm"),
    (SUNNY_DAY, "Sunny Day", "it was sunny", "boolean"),
    // Subjective ratings
    (MOOD, "Mood", "mood", "1-10"),
    (ENERGY, "Energy", "energy", "1-10"),
    (STRESS, "Stress", "stress", "1-10"),
    // Previous day
    (PREV_DAY_WORKOUT, "Workout Yesterday", "a workout", "boolean"),
    (
        PREV_DAY_WORKOUT_MINUTES,
        "Workout Time Yesterday",
        "workout time",
        "minutes",
    ),
    (
        PREV_DAY_TOTAL_CAFFEINE_MG,
        "Caffeine Yesterday",
        "caffeine intake",
        "mg",
    ),
    (
        PREV_DAY_AFTERNOON_COFFEE,
        "Afternoon Coffee Yesterday",
        "an afternoon coffee",
        "boolean",
    ),
    (PREV_DAY_MEDITATION, "Meditation Yesterday", "meditation", "boolean"),
];

/// Definitions for the built-in catalog, in display order
pub fn default_definitions() -> Vec<MetricDefinition> {
    DEFAULT_METRICS
        .iter()
        .map(|&(key, label, description, unit)| MetricDefinition::new(key, label, description, unit))
        .collect()
}
