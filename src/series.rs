//! Date-ordered series extraction and chart data
//!
//! Rendering is left to whatever plotting surface consumes [`TimeSeries`] or
//! [`ChartSpec`]; nothing here draws.

use crate::types::{ExchangeObservation, Rate};
use chrono::NaiveDate;
use serde::Serialize;

/// Axis label for the date axis of a chart
pub const DATE_AXIS_LABEL: &str = "Dates";

/// Axis label for the value axis of a chart
pub const RATE_AXIS_LABEL: &str = "Rate";

/// Records sorted ascending by date, keeping input order for equal dates
fn sorted_by_date(records: &[ExchangeObservation]) -> Vec<&ExchangeObservation> {
    let mut sorted: Vec<&ExchangeObservation> = records.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|obs| obs.date());
    sorted
}

/// Dates of `records` in ascending date order
pub fn extract_dates(records: &[ExchangeObservation]) -> Vec<NaiveDate> {
    sorted_by_date(records)
        .into_iter()
        .map(|obs| obs.date())
        .collect()
}

/// Rates of `records` in ascending date order
///
/// Positionally aligned with [`extract_dates`] called on the same slice.
pub fn extract_values(records: &[ExchangeObservation]) -> Vec<Rate> {
    sorted_by_date(records)
        .into_iter()
        .map(|obs| obs.rate())
        .collect()
}

/// Parallel date and value sequences for one filtered set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Rate>,
}

impl FilteredSeries {
    pub fn from_records(records: &[ExchangeObservation]) -> Self {
        Self {
            dates: extract_dates(records),
            values: extract_values(records),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn into_time_series(self, currency: &str) -> TimeSeries {
        build_time_series(&self.dates, &self.values, currency)
    }
}

/// A single (date, value) point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Rate,
}

/// Named, date-ordered series for a plotting collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Series label for a currency
pub fn series_label(currency: &str) -> String {
    format!("Exchange rates for {}", currency)
}

/// Zip dates and values positionally into a named series
///
/// # Panics
/// If `dates` and `values` differ in length. Both are expected to come from
/// the same filtered records, so a mismatch is a caller bug.
pub fn build_time_series(dates: &[NaiveDate], values: &[Rate], currency: &str) -> TimeSeries {
    assert_eq!(
        dates.len(),
        values.len(),
        "series shape mismatch: {} dates vs {} values",
        dates.len(),
        values.len()
    );

    TimeSeries {
        label: series_label(currency),
        points: dates
            .iter()
            .zip(values)
            .map(|(&date, &value)| SeriesPoint { date, value })
            .collect(),
    }
}

/// Everything a charting surface needs to draw one currency's window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub series: TimeSeries,
}

/// Wrap a series with a title naming the currency and window
pub fn build_chart(series: TimeSeries, currency: &str, from: NaiveDate, to: NaiveDate) -> ChartSpec {
    ChartSpec {
        title: format!("{} between {} and {}", series_label(currency), from, to),
        x_axis_label: DATE_AXIS_LABEL.to_string(),
        y_axis_label: RATE_AXIS_LABEL.to_string(),
        series,
    }
}
