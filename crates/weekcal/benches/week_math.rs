use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use weekcal::{resolve, week_coordinate, weeks_in_year, weeks_of_year, RecurringAnchor};

fn bench_week_coordinate(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    c.bench_function("week_coordinate", |b| {
        b.iter(|| week_coordinate(black_box(date)).unwrap())
    });
}

fn bench_weeks_in_year(c: &mut Criterion) {
    c.bench_function("weeks_in_year_400", |b| {
        b.iter(|| {
            (2000..2400)
                .map(|y| weeks_in_year(black_box(y)).unwrap())
                .sum::<u32>()
        })
    });
    c.bench_function("weeks_of_year", |b| {
        b.iter(|| weeks_of_year(black_box(2026)).unwrap())
    });
}

fn bench_resolve(c: &mut Criterion) {
    let leap = RecurringAnchor::annual(2, 29).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    c.bench_function("resolve_leap_day_rollover", |b| {
        b.iter(|| resolve(black_box(&leap), black_box(today)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_week_coordinate,
    bench_weeks_in_year,
    bench_resolve
);
criterion_main!(benches);
