//! Parser configuration

use crate::error::{FxStatsError, Result};
use serde::{Deserialize, Serialize};

/// Default date format: day/month/year, day and month with one or two digits
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// How raw rows are split and interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// chrono format string for the date field
    pub date_format: String,
    /// Whether the first line is a header to discard
    pub has_header: bool,
}

impl ParserConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Delimiter as a byte for the csv reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(FxStatsError::Config(format!(
                "Delimiter must be ASCII, got '{}'",
                self.delimiter
            )))
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            has_header: true,
        }
    }
}
