//! Metric keys produced by the daily aggregator

pub const SLEEP_SCORE: &str = "sleepScore";
pub const SLEEP_HOURS: &str = "sleepHours";
pub const FOCUS_MINUTES: &str = "focusMinutes";

pub const MEDITATION: &str = "meditation";
pub const JOURNALING: &str = "journaling";
pub const SCREENS_OFF_BEFORE_BED: &str = "screensOffBeforeBed";

pub const COFFEE_COUNT: &str = "coffeeCount";
pub const TOTAL_CAFFEINE_MG: &str = "totalCaffeineMg";
pub const AFTERNOON_COFFEE: &str = "afternoonCoffee";

pub const WORKOUT: &str = "workout";
pub const WORKOUT_MINUTES: &str = "workoutMinutes";
pub const RUN_DISTANCE_KM: &str = "runDistanceKm";
pub const RUN_DURATION_MIN: &str = "runDurationMin";

pub const AVG_TEMPERATURE_C: &str = "avgTemperatureC";
pub const AVG_CLOUD_COVER: &str = "avgCloudCover";
pub const PRECIPITATION_MM: &str = "precipitationMm";
pub const SUNNY_DAY: &str = "sunnyDay";

pub const MOOD: &str = "mood";
pub const ENERGY: &str = "energy";
pub const STRESS: &str = "stress";

pub const PREV_DAY_WORKOUT: &str = "prevDayWorkout";
pub const PREV_DAY_WORKOUT_MINUTES: &str = "prevDayWorkoutMinutes";
pub const PREV_DAY_TOTAL_CAFFEINE_MG: &str = "prevDayTotalCaffeineMg";
pub const PREV_DAY_AFTERNOON_COFFEE: &str = "prevDayAfternoonCoffee";
pub const PREV_DAY_MEDITATION: &str = "prevDayMeditation";
