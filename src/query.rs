//! Currency enumeration and window filtering over a dataset

use crate::types::{CurrencyCode, ExchangeDataset, ExchangeObservation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive date window `[from, to]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl FilterWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Check if a date lies within the window (both ends included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// A window whose start is after its end matches nothing
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

/// Distinct currency codes in ascending lexicographic order
pub fn list_currencies(dataset: &ExchangeDataset) -> Vec<CurrencyCode> {
    dataset
        .iter()
        .map(|obs| obs.currency())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Observations of `currency` dated within `[from, to]`, in dataset order
pub fn filter(
    dataset: &ExchangeDataset,
    currency: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<ExchangeObservation> {
    filter_window(dataset, currency, &FilterWindow::new(from, to))
}

/// Same as [`filter`], taking a [`FilterWindow`]
pub fn filter_window(
    dataset: &ExchangeDataset,
    currency: &str,
    window: &FilterWindow,
) -> Vec<ExchangeObservation> {
    if window.is_inverted() {
        log::warn!(
            "Filter window for {} is inverted ({} > {}), no observations match",
            currency,
            window.from,
            window.to
        );
    }

    let matched: Vec<ExchangeObservation> = dataset
        .iter()
        .filter(|obs| obs.currency() == currency && window.contains(obs.date()))
        .cloned()
        .collect();

    log::debug!(
        "Filtered {} of {} observations for {} in [{}, {}]",
        matched.len(),
        dataset.len(),
        currency,
        window.from,
        window.to
    );

    matched
}

/// Earliest and latest observation date for a currency
pub fn date_bounds(dataset: &ExchangeDataset, currency: &str) -> Option<(NaiveDate, NaiveDate)> {
    dataset
        .iter()
        .filter(|obs| obs.currency() == currency)
        .map(|obs| obs.date())
        .fold(None, |bounds, date| match bounds {
            Some((min, max)) => Some((date.min(min), date.max(max))),
            None => Some((date, date)),
        })
}
