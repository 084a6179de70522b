//! fx-report CLI - Inspect exchange-rate files from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # List currencies in a file
//! fx-report currencies rates.csv
//!
//! # Statistics for USD in January 2024
//! fx-report report rates.csv -c USD --from 2024-01-01 --to 2024-01-31
//!
//! # Chart data for a plotting tool
//! fx-report series rates.csv -c USD > usd.json
//! ```

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rusty_fxstats::config::ParserConfig;
use rusty_fxstats::data::parser::ObservationParser;
use rusty_fxstats::error::{FxStatsError, Result as FxResult};
use rusty_fxstats::query::{date_bounds, filter_window, list_currencies, FilterWindow};
use rusty_fxstats::report::StatisticsReport;
use rusty_fxstats::series::{build_chart, extract_values, FilteredSeries};
use rusty_fxstats::types::ExchangeDataset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// fx-report: exchange-rate statistics and chart data
#[derive(Parser)]
#[command(name = "fx-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Exchange-rate statistics and chart data", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List distinct currency codes in a file
    Currencies {
        /// Path to the rates file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the observations matching a currency and window
    Filter(QueryArgs),

    /// Print descriptive statistics for a currency and window
    Report {
        #[command(flatten)]
        query: QueryArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print chart data (JSON) for a currency and window
    Series(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Path to the rates file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Currency code (case-sensitive)
    #[arg(short = 'c', long)]
    currency: String,

    /// Window start (YYYY-MM-DD), defaults to the earliest observation
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Window end (YYYY-MM-DD), defaults to the latest observation
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Config {
    #[serde(default)]
    parser: ParserConfig,
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => dirs::config_dir().map(|dir| dir.join("rusty-fxstats").join("config.toml")),
        };

        let Some(path) = path.filter(|p| p.exists()) else {
            return Config::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{} Failed to parse config: {}", "Warning:".yellow(), e);
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
                Config::default()
            }
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    if cli.verbose {
        println!(
            "{} v{}",
            "fx-report".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "Delimiter: '{}', date format: {}",
            config.parser.delimiter,
            config.parser.date_format.dimmed()
        );
    }

    let parser = ObservationParser::new(config.parser);

    let result = match cli.command {
        Commands::Currencies { file } => show_currencies(&parser, &file),
        Commands::Filter(query) => show_filter(&parser, &query),
        Commands::Report { query, json } => show_report(&parser, &query, json),
        Commands::Series(query) => show_series(&parser, &query),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn load(parser: &ObservationParser, file: &Path) -> ExchangeDataset {
    let dataset = parser.load(file);
    if dataset.is_empty() {
        eprintln!(
            "{} No observations loaded from {}",
            "Warning:".yellow(),
            file.display()
        );
    }
    dataset
}

/// Resolve the query window, filling missing ends from the data
fn resolve_window(dataset: &ExchangeDataset, query: &QueryArgs) -> FxResult<FilterWindow> {
    let bounds = date_bounds(dataset, &query.currency);
    let from = query.from.or(bounds.map(|(min, _)| min));
    let to = query.to.or(bounds.map(|(_, max)| max));

    match (from, to) {
        (Some(from), Some(to)) => Ok(FilterWindow::new(from, to)),
        _ => Err(FxStatsError::Config(format!(
            "No observations for {} and no --from/--to given",
            query.currency
        ))),
    }
}

fn show_currencies(parser: &ObservationParser, file: &Path) -> FxResult<()> {
    let dataset = load(parser, file);
    for currency in list_currencies(&dataset) {
        println!("{}", currency);
    }
    Ok(())
}

fn show_filter(parser: &ObservationParser, query: &QueryArgs) -> FxResult<()> {
    let dataset = load(parser, &query.file);
    let window = resolve_window(&dataset, query)?;

    for obs in filter_window(&dataset, &query.currency, &window) {
        println!("{}\t{}\t{}", obs.currency(), obs.date(), obs.rate());
    }
    Ok(())
}

fn show_report(parser: &ObservationParser, query: &QueryArgs, json: bool) -> FxResult<()> {
    let dataset = load(parser, &query.file);
    let window = resolve_window(&dataset, query)?;

    let filtered = filter_window(&dataset, &query.currency, &window);
    let report = StatisticsReport::from_values(&extract_values(&filtered));

    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_map())?);
        return Ok(());
    }

    println!(
        "{} {} ({} to {}, {} observations)",
        "Statistics for".bold(),
        query.currency.cyan().bold(),
        window.from,
        window.to,
        filtered.len()
    );
    for (metric, value) in report.iter() {
        println!("  {:<10} {:>12.6}", metric.name(), value);
    }
    Ok(())
}

fn show_series(parser: &ObservationParser, query: &QueryArgs) -> FxResult<()> {
    let dataset = load(parser, &query.file);
    let window = resolve_window(&dataset, query)?;

    let filtered = filter_window(&dataset, &query.currency, &window);
    let series = FilteredSeries::from_records(&filtered).into_time_series(&query.currency);
    let chart = build_chart(series, &query.currency, window.from, window.to);

    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
