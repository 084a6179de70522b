//! Core types: exchange observations and the datasets that hold them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currency code as it appears in the source (case-sensitive)
pub type CurrencyCode = String;

/// Exchange rate value
pub type Rate = f64;

/// One currency/date/rate observation
///
/// All three fields are set together at construction and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeObservation {
    currency: CurrencyCode,
    date: NaiveDate,
    rate: Rate,
}

impl ExchangeObservation {
    /// Create a new observation
    pub fn new(currency: impl Into<CurrencyCode>, date: NaiveDate, rate: Rate) -> Self {
        Self {
            currency: currency.into(),
            date,
            rate,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }
}

/// Ordered collection of observations in source order
///
/// Duplicate currency/date pairs are legal and all of them are kept.
/// A dataset is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDataset {
    observations: Vec<ExchangeObservation>,
}

impl ExchangeDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> &[ExchangeObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExchangeObservation> {
        self.observations.iter()
    }
}

impl From<Vec<ExchangeObservation>> for ExchangeDataset {
    fn from(observations: Vec<ExchangeObservation>) -> Self {
        Self { observations }
    }
}

impl FromIterator<ExchangeObservation> for ExchangeDataset {
    fn from_iter<I: IntoIterator<Item = ExchangeObservation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExchangeDataset {
    type Item = &'a ExchangeObservation;
    type IntoIter = std::slice::Iter<'a, ExchangeObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_observation_accessors() {
        let obs = ExchangeObservation::new("USD", date(2024, 1, 5), 1.08);
        assert_eq!(obs.currency(), "USD");
        assert_eq!(obs.date(), date(2024, 1, 5));
        assert_eq!(obs.rate(), 1.08);
    }

    #[test]
    fn test_dataset_keeps_duplicates_in_order() {
        let dataset: ExchangeDataset = vec![
            ExchangeObservation::new("USD", date(2024, 1, 1), 1.0),
            ExchangeObservation::new("USD", date(2024, 1, 1), 1.0),
            ExchangeObservation::new("EUR", date(2023, 12, 31), 0.9),
        ]
        .into();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.observations()[0], dataset.observations()[1]);
        assert_eq!(dataset.observations()[2].currency(), "EUR");
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = ExchangeDataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.iter().count(), 0);
    }
}
