//! Property tests for currency listing, filtering and series alignment

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rusty_fxstats::prelude::*;
use std::collections::BTreeSet;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn observation() -> impl Strategy<Value = ExchangeObservation> {
    (
        prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "chf"]),
        0i64..60,
        -1000i32..1000,
    )
        .prop_map(|(currency, offset, cents)| {
            ExchangeObservation::new(
                currency,
                base_date() + Duration::days(offset),
                cents as f64 / 100.0,
            )
        })
}

fn dataset() -> impl Strategy<Value = ExchangeDataset> {
    prop::collection::vec(observation(), 0..80).prop_map(ExchangeDataset::from)
}

proptest! {
    #[test]
    fn currencies_are_unique_and_sorted(dataset in dataset()) {
        let currencies = list_currencies(&dataset);
        let expected: Vec<String> = dataset
            .iter()
            .map(|obs| obs.currency().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(&currencies, &expected);
        prop_assert!(currencies.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filter_respects_currency_and_window(
        dataset in dataset(),
        currency in prop::sample::select(vec!["USD", "EUR", "JPY"]),
        start in 0i64..60,
        len in 0i64..30,
    ) {
        let from = base_date() + Duration::days(start);
        let to = from + Duration::days(len);
        let filtered = filter(&dataset, currency, from, to);

        for obs in &filtered {
            prop_assert_eq!(obs.currency(), currency);
            prop_assert!(obs.date() >= from && obs.date() <= to);
        }

        let expected = dataset
            .iter()
            .filter(|obs| obs.currency() == currency && obs.date() >= from && obs.date() <= to)
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn dates_and_values_stay_paired(dataset in dataset()) {
        let records = dataset.observations();
        let dates = extract_dates(records);
        let values = extract_values(records);

        prop_assert_eq!(dates.len(), values.len());
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));

        // Each (date, value) pair exists in the source, with multiplicity
        let mut remaining: Vec<(NaiveDate, f64)> =
            records.iter().map(|obs| (obs.date(), obs.rate())).collect();
        for pair in dates.iter().copied().zip(values.iter().copied()) {
            let pos = remaining.iter().position(|r| *r == pair);
            prop_assert!(pos.is_some(), "pair {:?} not in source", pair);
            remaining.swap_remove(pos.unwrap());
        }
    }

    #[test]
    fn parsed_source_recovers_currencies(dataset in dataset()) {
        let mut text = String::from("currency,date,rate\n");
        for obs in dataset.iter() {
            text.push_str(&format!(
                "{},{},{}\n",
                obs.currency(),
                obs.date().format("%-d/%-m/%Y"),
                obs.rate()
            ));
        }

        let parsed = parse_lines(text.lines());
        prop_assert_eq!(parsed.len(), dataset.len());
        prop_assert_eq!(list_currencies(&parsed), list_currencies(&dataset));
        prop_assert_eq!(&parsed, &dataset);
    }

    #[test]
    fn statistics_bounded_by_extremes(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..50)) {
        let report = StatisticsReport::from_values(&values);
        let tolerance = 1e-6;

        prop_assert!(report.minimum <= report.maximum);
        prop_assert!(report.average >= report.minimum - tolerance);
        prop_assert!(report.average <= report.maximum + tolerance);
        prop_assert!(report.median >= report.minimum && report.median <= report.maximum);
        prop_assert!(values.contains(&report.mode));
        prop_assert!(report.deviation >= 0.0);
    }
}
