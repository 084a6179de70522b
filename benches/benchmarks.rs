use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_fxstats::prelude::*;

const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "JPY", "CHF"];

fn generated_source(days: i64) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut lines = vec!["currency,date,rate".to_string()];

    for i in 0..days {
        let date = start + Duration::days(i);
        for (c, currency) in CURRENCIES.iter().enumerate() {
            let rate = 1.0 + c as f64 * 0.1 + (i % 37) as f64 * 0.001;
            lines.push(format!("{},{},{}", currency, date.format("%-d/%-m/%Y"), rate));
        }
    }

    lines
}

fn benchmark_parse(c: &mut Criterion) {
    let lines = generated_source(1000);

    c.bench_function("parse_5000_lines", |b| {
        b.iter(|| parse_lines(black_box(&lines)));
    });
}

fn benchmark_report(c: &mut Criterion) {
    let dataset = parse_lines(generated_source(1000));
    let from = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();

    c.bench_function("report_two_year_window", |b| {
        b.iter(|| build_report(black_box("EUR"), from, to, &dataset));
    });

    c.bench_function("list_currencies", |b| {
        b.iter(|| list_currencies(black_box(&dataset)));
    });
}

fn benchmark_series(c: &mut Criterion) {
    let dataset = parse_lines(generated_source(1000));
    let from = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
    let filtered = filter(&dataset, "USD", from, to);

    c.bench_function("series_1000_points", |b| {
        b.iter(|| FilteredSeries::from_records(black_box(&filtered)).into_time_series("USD"));
    });
}

criterion_group!(benches, benchmark_parse, benchmark_report, benchmark_series);
criterion_main!(benches);
