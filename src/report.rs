//! Named statistics report for a currency and date window

use crate::query::filter;
use crate::series::extract_values;
use crate::statistics;
use crate::types::ExchangeDataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six metrics every report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    Average,
    Deviation,
    Maximum,
    Minimum,
    Median,
    Mode,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 6] = [
        Metric::Average,
        Metric::Deviation,
        Metric::Maximum,
        Metric::Minimum,
        Metric::Median,
        Metric::Mode,
    ];

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Average => "Average",
            Metric::Deviation => "Deviation",
            Metric::Maximum => "Max",
            Metric::Minimum => "Min",
            Metric::Median => "Median",
            Metric::Mode => "Mode",
        }
    }

    /// Report key as used by existing consumers of the mapping
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Average => "Promedio",
            Metric::Deviation => "Desviación",
            Metric::Maximum => "Máximo",
            Metric::Minimum => "Mínimo",
            Metric::Median => "Mediana",
            Metric::Mode => "Moda",
        }
    }

    /// Compute this metric over a value sequence
    pub fn compute(&self, values: &[f64]) -> f64 {
        match self {
            Metric::Average => statistics::average(values),
            Metric::Deviation => statistics::deviation(values),
            Metric::Maximum => statistics::maximum(values),
            Metric::Minimum => statistics::minimum(values),
            Metric::Median => statistics::median(values),
            Metric::Mode => statistics::mode(values),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All six statistics for one value sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub average: f64,
    pub deviation: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub median: f64,
    pub mode: f64,
}

impl StatisticsReport {
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            average: Metric::Average.compute(values),
            deviation: Metric::Deviation.compute(values),
            maximum: Metric::Maximum.compute(values),
            minimum: Metric::Minimum.compute(values),
            median: Metric::Median.compute(values),
            mode: Metric::Mode.compute(values),
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Average => self.average,
            Metric::Deviation => self.deviation,
            Metric::Maximum => self.maximum,
            Metric::Minimum => self.minimum,
            Metric::Median => self.median,
            Metric::Mode => self.mode,
        }
    }

    /// (metric, value) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Mapping keyed by [`Metric::label`]; always holds all six keys
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().map(|(m, value)| (m.label(), value)).collect()
    }
}

/// Filter the dataset, then compute every statistic over the matching rates
///
/// An empty match yields a report with every metric at `0.0`.
pub fn build_report(
    currency: &str,
    from: NaiveDate,
    to: NaiveDate,
    dataset: &ExchangeDataset,
) -> StatisticsReport {
    let filtered = filter(dataset, currency, from, to);
    let values = extract_values(&filtered);
    StatisticsReport::from_values(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExchangeObservation;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> ExchangeDataset {
        vec![
            ExchangeObservation::new("USD", date(2024, 1, 1), 1.0),
            ExchangeObservation::new("USD", date(2024, 1, 2), 1.2),
            ExchangeObservation::new("EUR", date(2024, 1, 1), 0.9),
        ]
        .into()
    }

    #[test]
    fn test_build_report() {
        let report = build_report("USD", date(2024, 1, 1), date(2024, 1, 2), &dataset());

        assert_relative_eq!(report.average, 1.1, epsilon = 1e-12);
        assert_relative_eq!(report.deviation, 0.1, epsilon = 1e-12);
        assert_eq!(report.maximum, 1.2);
        assert_eq!(report.minimum, 1.0);
        assert_relative_eq!(report.median, 1.1, epsilon = 1e-12);
        assert_eq!(report.mode, 1.0);
    }

    #[test]
    fn test_empty_filter_gives_zero_report() {
        let report = build_report("JPY", date(2024, 1, 1), date(2024, 1, 2), &dataset());
        assert_eq!(report, StatisticsReport::default());
        assert!(report.iter().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn test_map_has_all_keys() {
        let map = StatisticsReport::default().to_map();
        assert_eq!(map.len(), 6);
        for key in ["Promedio", "Desviación", "Máximo", "Mínimo", "Mediana", "Moda"] {
            assert_eq!(map.get(key), Some(&0.0), "missing {}", key);
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let report = StatisticsReport::from_values(&[1.0, 2.0, 2.0, 5.0]);
        assert_eq!(report.get(Metric::Maximum), 5.0);
        assert_eq!(report.get(Metric::Minimum), 1.0);
        assert_eq!(report.get(Metric::Mode), 2.0);
        assert_eq!(report.get(Metric::Median), 2.0);
        assert_eq!(report.to_map()["Máximo"], 5.0);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::Maximum.to_string(), "Max");
        assert_eq!(Metric::Deviation.label(), "Desviación");
        assert_eq!(Metric::ALL.len(), 6);
    }
}
