//! # rusty-fxstats
//!
//! Parsing, filtering, series extraction and descriptive statistics for
//! currency exchange observations.
//!
//! Raw `currency,date,rate` rows are parsed into an [`ExchangeDataset`],
//! filtered by currency and an inclusive date window, turned into a
//! date-ordered series for a charting surface, and summarized by six
//! statistics (average, population deviation, max, min, median, mode).
//!
//! ## Example
//!
//! ```rust
//! use rusty_fxstats::prelude::*;
//! use chrono::NaiveDate;
//!
//! let dataset = parse_lines([
//!     "currency,date,rate",
//!     "USD,1/1/2024,1.0",
//!     "USD,2/1/2024,1.2",
//!     "EUR,1/1/2024,0.9",
//! ]);
//!
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//!
//! assert_eq!(list_currencies(&dataset), vec!["EUR", "USD"]);
//!
//! let report = build_report("USD", from, to, &dataset);
//! assert_eq!(report.maximum, 1.2);
//! assert_eq!(report.minimum, 1.0);
//! ```
//!
//! [`ExchangeDataset`]: crate::types::ExchangeDataset

pub mod config;
pub mod data;
pub mod error;
pub mod query;
pub mod report;
pub mod series;
pub mod statistics;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::config::ParserConfig;
    pub use crate::data::{load_dataset, parse_lines, try_load_dataset, ObservationParser};
    pub use crate::error::{FxStatsError, Result};
    pub use crate::query::{date_bounds, filter, filter_window, list_currencies, FilterWindow};
    pub use crate::report::{build_report, Metric, StatisticsReport};
    pub use crate::series::{
        build_chart, build_time_series, extract_dates, extract_values, ChartSpec, FilteredSeries,
        SeriesPoint, TimeSeries,
    };
    pub use crate::types::*;
}
