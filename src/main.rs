//! Daylens CLI
//!
//! Command-line interface for correlation discovery:
//! - Discover correlations across all metrics
//! - Look up a single metric pair
//! - List the metric catalog
//! - Summarize one metric
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use daylens::aggregate::{summarize_metric, CsvSource, DateRange, MetricSummary};
use daylens::catalog::MetricCatalog;
use daylens::config::{generate_default_config, Config, LoggingConfig};
use daylens::discovery::{DiscoveredCorrelation, DiscoveryEngine};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "daylens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Discover correlations in your daily personal metrics")]
#[command(long_about = "Daylens aligns daily sleep, coffee, exercise, weather and mood data\nand reports the statistically significant relationships between them.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/daylens/config.toml or ./daylens.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory with the per-table CSV files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// JSON metric catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Last day of the analysis window (default: today, UTC)
    #[arg(long, global = true)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search all metric pairs for significant correlations
    Discover {
        /// Lookback window in days
        #[arg(short, long)]
        days: Option<u32>,
        /// Keep correlations with p-value at or below this
        #[arg(long)]
        p_value: Option<f64>,
        /// Keep correlations with |r| at or above this
        #[arg(long)]
        min_r: Option<f64>,
        /// Only analyse these metric keys (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        metrics: Vec<String>,
        /// Evaluate pairs on all CPU cores
        #[arg(long)]
        parallel: bool,
    },

    /// Correlation between two metrics, without significance filtering
    Between {
        /// First metric key
        metric_a: String,
        /// Second metric key
        metric_b: String,
        /// Lookback window in days
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// List the metric catalog
    Metrics,

    /// Summary statistics for one metric
    Summary {
        /// Metric key
        metric: String,
        /// Lookback window in days
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    let catalog = Arc::new(load_catalog(&cli, &config)?);
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| expand_home(&config.data.dir));
    tracing::debug!(data_dir = ?data_dir, metrics = catalog.len(), "Starting daylens");

    let engine = DiscoveryEngine::new(Arc::new(CsvSource::new(data_dir)), Arc::clone(&catalog));

    match cli.command {
        Commands::Discover {
            days,
            p_value,
            min_r,
            metrics,
            parallel,
        } => {
            let mut options = config.discovery.to_options();
            if let Some(days) = days {
                options = options.days(days);
            }
            if let Some(p) = p_value {
                options = options.p_value_threshold(p);
            }
            if let Some(r) = min_r {
                options = options.min_abs_r(r);
            }
            if !metrics.is_empty() {
                options = options.metrics(metrics);
            }
            if parallel {
                options = options.parallel(true);
            }
            if let Some(end) = cli.end_date {
                options = options.end_date(end);
            }

            let findings = engine.discover(&options).await?;
            print_findings(&findings, cli.format)?;
        }

        Commands::Between {
            metric_a,
            metric_b,
            days,
        } => {
            let days = days.unwrap_or(config.discovery.days);
            let finding = engine
                .correlation_between_ending(&metric_a, &metric_b, days, cli.end_date)
                .await?;

            match finding {
                Some(finding) => print_findings(std::slice::from_ref(&finding), cli.format)?,
                None => {
                    eprintln!(
                        "No correlation for {} and {}: unknown or identical keys, two yes/no metrics, or fewer than {} shared days",
                        metric_a,
                        metric_b,
                        daylens::aggregate::MINIMUM_SAMPLE_SIZE
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::Metrics => print_metrics(&catalog, cli.format)?,

        Commands::Summary { metric, days } => {
            let definition = catalog
                .get(&metric)
                .with_context(|| format!("Unknown metric: {metric}"))?;
            if definition.is_boolean() {
                bail!("{metric} is a yes/no metric; summaries need numeric values");
            }

            let days = days.unwrap_or(config.discovery.days);
            let end = cli.end_date.unwrap_or_else(|| Utc::now().date_naive());
            let range = DateRange::ending_on(end, days)
                .with_context(|| format!("Invalid window: {days} days ending {end}"))?;

            let records = engine.aggregator().fetch_daily_metrics(range).await?;
            match summarize_metric(&records, &metric) {
                Some(summary) => print_summary(&summary, cli.format)?,
                None => println!("No data for {} in {}", metric, range),
            }
        }

        Commands::Config { output } => write_default_config(output.as_deref())?,
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daylens={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_catalog(cli: &Cli, config: &Config) -> anyhow::Result<MetricCatalog> {
    let path = cli
        .catalog
        .clone()
        .or_else(|| config.data.catalog.as_deref().map(expand_home));

    let catalog = match path {
        Some(path) => MetricCatalog::load(&path)?,
        None => MetricCatalog::builtin()?,
    };
    Ok(catalog)
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {path:?}"))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

fn print_findings(findings: &[DiscoveredCorrelation], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(findings)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([
                "metric_a",
                "metric_b",
                "r",
                "p_value",
                "n",
                "strength",
                "confidence",
                "start",
                "end",
                "interpretation",
            ])?;
            for f in findings {
                writer.write_record([
                    f.metric_a.key.clone(),
                    f.metric_b.key.clone(),
                    format!("{:.4}", f.correlation.r),
                    format!("{:.6}", f.correlation.p_value),
                    f.correlation.n.to_string(),
                    f.correlation.strength.to_string(),
                    f.correlation.confidence.to_string(),
                    f.date_range.start.to_string(),
                    f.date_range.end.to_string(),
                    f.interpretation.clone(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if findings.is_empty() {
                println!("No correlations found");
                return Ok(());
            }

            println!(
                "{:<28} {:<28} {:>7} {:>9} {:>4}  {}",
                "Metric A", "Metric B", "r", "p", "n", "Confidence"
            );
            println!("{}", "-".repeat(92));

            for f in findings {
                println!(
                    "{:<28} {:<28} {:>7.3} {:>9.4} {:>4}  {}",
                    f.metric_a.label,
                    f.metric_b.label,
                    f.correlation.r,
                    f.correlation.p_value,
                    f.correlation.n,
                    f.correlation.confidence
                );
                println!("    {}", f.interpretation);
            }

            println!();
            println!("{} correlations ({})", findings.len(), findings[0].date_range);
        }
    }
    Ok(())
}

fn print_metrics(catalog: &MetricCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.all())?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for metric in catalog.all() {
                writer.serialize(metric)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            println!("{:<24} {:<28} {:<10} {}", "Key", "Label", "Unit", "Kind");
            println!("{}", "-".repeat(76));

            for metric in catalog.all() {
                let kind = match (metric.is_boolean(), metric.is_lagged()) {
                    (true, true) => "yes/no, previous day",
                    (true, false) => "yes/no",
                    (false, true) => "numeric, previous day",
                    (false, false) => "numeric",
                };
                println!(
                    "{:<24} {:<28} {:<10} {}",
                    metric.key, metric.label, metric.unit, kind
                );
            }
        }
    }
    Ok(())
}

fn print_summary(summary: &MetricSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.serialize(summary)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            println!("Metric:   {}", summary.key);
            println!("Days:     {} ({} to {})", summary.count, summary.first_date, summary.last_date);
            println!("Mean:     {:.2}", summary.mean);
            println!("Min:      {:.2}", summary.min);
            println!("Max:      {:.2}", summary.max);
            println!("Std dev:  {:.2}", summary.std_dev);
        }
    }
    Ok(())
}
