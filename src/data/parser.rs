//! Parser for delimited exchange-rate sources
//!
//! Expected format (first line is a header and is discarded):
//!
//! ```text
//! currency,date,rate
//! USD,1/1/2024,1.0
//! EUR,15/1/2024,0.91
//! ```
//!
//! Parsing is all-or-nothing: a single malformed row rejects the whole
//! source. The `try_*` methods return that error; the plain methods log it
//! and hand back an empty dataset instead, so callers only ever see every
//! row or none of them.

use crate::config::{ParserConfig, DEFAULT_DATE_FORMAT};
use crate::error::{FxStatsError, Result};
use crate::types::{ExchangeDataset, ExchangeObservation};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of fields in every data row
pub const FIELD_COUNT: usize = 3;

/// Turns raw rows into an [`ExchangeDataset`]
///
/// Fields are never unquoted: `"USD"` is a different currency from `USD`,
/// and a quoted date fails to parse. Line sources treat a blank line as a
/// row with one field and reject it. Byte streams and files go through the
/// csv reader, which skips blank lines.
///
/// # Example
/// ```
/// use rusty_fxstats::data::parser::ObservationParser;
///
/// let parser = ObservationParser::default();
/// let dataset = parser.parse_lines(["currency,date,rate", "USD,5/3/2024,1.09"]);
/// assert_eq!(dataset.len(), 1);
///
/// // One bad row empties the batch
/// let dataset = parser.parse_lines(["currency,date,rate", "USD,5/3/2024,1.09", "EUR,bad,0.9"]);
/// assert!(dataset.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObservationParser {
    config: ParserConfig,
}

impl ObservationParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse raw lines, failing on the first malformed row
    pub fn try_parse_lines<I, S>(&self, lines: I) -> Result<ExchangeDataset>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skip = usize::from(self.config.has_header);
        let mut observations = Vec::new();

        for (idx, line) in lines.into_iter().enumerate().skip(skip) {
            let fields: Vec<&str> = line.as_ref().split(self.config.delimiter).collect();
            observations.push(self.parse_fields(&fields, idx + 1)?);
        }

        Ok(ExchangeDataset::from(observations))
    }

    /// Parse raw lines; any failure is logged and yields an empty dataset
    pub fn parse_lines<I, S>(&self, lines: I) -> ExchangeDataset
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        absorb(self.try_parse_lines(lines))
    }

    /// Parse a delimited byte stream, failing on the first malformed row
    pub fn try_parse_reader<R: Read>(&self, reader: R) -> Result<ExchangeDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter_byte()?)
            .has_headers(self.config.has_header)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut observations = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let fallback_line = idx + 1 + usize::from(self.config.has_header);
            let record = result.map_err(|e| read_error(e, fallback_line))?;
            let line = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(fallback_line);
            let fields: Vec<&str> = record.iter().collect();
            observations.push(self.parse_fields(&fields, line)?);
        }

        Ok(ExchangeDataset::from(observations))
    }

    /// Parse a delimited byte stream; any failure is logged and yields an empty dataset
    pub fn parse_reader<R: Read>(&self, reader: R) -> ExchangeDataset {
        absorb(self.try_parse_reader(reader))
    }

    /// Read and parse a file, failing if it cannot be opened or any row is malformed
    pub fn try_load<P: AsRef<Path>>(&self, path: P) -> Result<ExchangeDataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FxStatsError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        self.try_parse_reader(file)
    }

    /// Read and parse a file; any failure is logged and yields an empty dataset
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ExchangeDataset {
        absorb(self.try_load(path))
    }

    fn parse_fields(&self, fields: &[&str], line: usize) -> Result<ExchangeObservation> {
        if fields.len() != FIELD_COUNT {
            return Err(FxStatsError::MalformedRow {
                line,
                reason: format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
            });
        }

        let currency = fields[0];
        if currency.is_empty() {
            return Err(FxStatsError::MalformedRow {
                line,
                reason: "empty currency code".to_string(),
            });
        }

        if self.config.date_format == DEFAULT_DATE_FORMAT && !is_day_month_year(fields[1]) {
            return Err(FxStatsError::InvalidDate {
                line,
                value: fields[1].to_string(),
                reason: "expected d/M/yyyy".to_string(),
            });
        }

        let date = NaiveDate::parse_from_str(fields[1], &self.config.date_format).map_err(|e| {
            FxStatsError::InvalidDate {
                line,
                value: fields[1].to_string(),
                reason: e.to_string(),
            }
        })?;

        let rate = fields[2]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite())
            .ok_or_else(|| FxStatsError::InvalidRate {
                line,
                value: fields[2].to_string(),
            })?;

        Ok(ExchangeObservation::new(currency, date, rate))
    }
}

/// Shape check for the default format: one or two digit day and month,
/// a year of at least four digits, nothing else
fn is_day_month_year(text: &str) -> bool {
    fn digits(part: &str, min: usize, max: usize) -> bool {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    }

    let parts: Vec<&str> = text.split('/').collect();
    matches!(
        parts.as_slice(),
        [day, month, year] if digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, usize::MAX)
    )
}

fn read_error(err: csv::Error, line: usize) -> FxStatsError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => FxStatsError::Io(e),
        csv::ErrorKind::Utf8 { pos, err } => FxStatsError::MalformedRow {
            line: pos.map(|p| p.line() as usize).unwrap_or(line),
            reason: err.to_string(),
        },
        other => FxStatsError::MalformedRow {
            line,
            reason: format!("{:?}", other),
        },
    }
}

fn absorb(result: Result<ExchangeDataset>) -> ExchangeDataset {
    match result {
        Ok(dataset) => {
            log::debug!("Parsed {} exchange observations", dataset.len());
            dataset
        }
        Err(e) => {
            log::error!("Discarding exchange data source: {}", e);
            ExchangeDataset::new()
        }
    }
}

/// Parse raw lines with the default configuration
pub fn parse_lines<I, S>(lines: I) -> ExchangeDataset
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ObservationParser::default().parse_lines(lines)
}

/// Load a file with the default configuration, empty on any failure
pub fn load_dataset<P: AsRef<Path>>(path: P) -> ExchangeDataset {
    ObservationParser::default().load(path)
}

/// Load a file with the default configuration, reporting the failure
pub fn try_load_dataset<P: AsRef<Path>>(path: P) -> Result<ExchangeDataset> {
    ObservationParser::default().try_load(path)
}
