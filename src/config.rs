//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `DAYLENS_*` environment variable overrides.

use crate::discovery::{
    DiscoveryOptions, DEFAULT_DAYS, DEFAULT_MIN_ABS_R, DEFAULT_P_VALUE_THRESHOLD,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Discovery run defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_days")]
    pub days: u32,

    #[serde(default = "default_p_value_threshold")]
    pub p_value_threshold: f64,

    #[serde(default = "default_min_abs_r")]
    pub min_abs_r: f64,

    /// Metric keys to analyse; empty means the whole catalog
    #[serde(default)]
    pub metrics: Vec<String>,

    #[serde(default)]
    pub parallel: bool,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_p_value_threshold() -> f64 {
    DEFAULT_P_VALUE_THRESHOLD
}

fn default_min_abs_r() -> f64 {
    DEFAULT_MIN_ABS_R
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            p_value_threshold: default_p_value_threshold(),
            min_abs_r: default_min_abs_r(),
            metrics: Vec::new(),
            parallel: false,
        }
    }
}

impl DiscoveryConfig {
    /// Options for a discovery run using these defaults
    pub fn to_options(&self) -> DiscoveryOptions {
        let options = DiscoveryOptions::new()
            .days(self.days)
            .p_value_threshold(self.p_value_threshold)
            .min_abs_r(self.min_abs_r)
            .parallel(self.parallel);

        if self.metrics.is_empty() {
            options
        } else {
            options.metrics(self.metrics.iter().cloned())
        }
    }
}

/// Where the daily tables and catalog live
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the per-table CSV files
    #[serde(default = "default_data_dir")]
    pub dir: String,

    /// Optional JSON catalog replacing the built-in metrics
    #[serde(default)]
    pub catalog: Option<String>,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("daylens").to_string_lossy().to_string())
        .unwrap_or_else(|| "./daylens_data".to_string())
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            catalog: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("daylens").join("config.toml")),
            Some(PathBuf::from("./daylens.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!(path = ?path, "Loaded config");
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "Failed to load config");
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Discovery overrides
        if let Some(days) = var("DAYLENS_DAYS").and_then(|v| v.parse().ok()) {
            self.discovery.days = days;
        }
        if let Some(p) = var("DAYLENS_P_VALUE").and_then(|v| v.parse().ok()) {
            self.discovery.p_value_threshold = p;
        }
        if let Some(r) = var("DAYLENS_MIN_R").and_then(|v| v.parse().ok()) {
            self.discovery.min_abs_r = r;
        }
        if let Some(metrics) = var("DAYLENS_METRICS") {
            self.discovery.metrics = metrics
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(parallel) = var("DAYLENS_PARALLEL").and_then(|v| v.parse().ok()) {
            self.discovery.parallel = parallel;
        }

        // Data overrides
        if let Some(dir) = var("DAYLENS_DATA_DIR") {
            self.data.dir = dir;
        }
        if let Some(catalog) = var("DAYLENS_CATALOG") {
            self.data.catalog = Some(catalog);
        }

        // Logging overrides
        if let Some(level) = var("DAYLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DAYLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Daylens Configuration
#
# Environment variables override these settings:
# - DAYLENS_DAYS
# - DAYLENS_P_VALUE
# - DAYLENS_MIN_R
# - DAYLENS_METRICS (comma-separated)
# - DAYLENS_PARALLEL
# - DAYLENS_DATA_DIR
# - DAYLENS_CATALOG
# - DAYLENS_LOG_LEVEL
# - DAYLENS_LOG_FORMAT

[discovery]
# Lookback window in days
days = 90

# Keep correlations with p-value at or below this
p_value_threshold = 0.1

# Keep correlations with |r| at or above this
min_abs_r = 0.3

# Restrict analysis to these metric keys (empty = all metrics)
metrics = []

# Evaluate metric pairs on all CPU cores
parallel = false

[data]
# Directory with sleep.csv, rituals.csv, coffee.csv, workouts.csv,
# weather.csv and ratings.csv
dir = "~/.local/share/daylens"

# Optional JSON file replacing the built-in metric catalog
# catalog = "~/.config/daylens/metrics.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for terminals) or json (for log collectors)
format = "pretty"
"#
    .to_string()
}
