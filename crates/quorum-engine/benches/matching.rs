// Criterion benchmarks for the two matching strategies.

use std::hint::black_box;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quorum_engine::{run_match, MatchOptions, ParticipantAvailability, TimeInterval};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn at(minutes: i64) -> DateTime<Utc> {
    base() + Duration::minutes(minutes)
}

/// Participants who all share one long daily block — the perfect path.
fn aligned_group(n: usize) -> Vec<ParticipantAvailability> {
    (0..n)
        .map(|i| {
            let intervals = (0..14)
                .map(|day| {
                    let open = day * 24 * 60 + 9 * 60;
                    TimeInterval::new(at(open), at(open + 8 * 60))
                })
                .collect();
            ParticipantAvailability::new(format!("u{i}"), format!("User {i}"), intervals)
        })
        .collect()
}

/// Participants whose blocks are staggered so no common time exists — the
/// partial path with a dense breakpoint set.
fn staggered_group(n: usize) -> Vec<ParticipantAvailability> {
    (0..n)
        .map(|i| {
            let offset = (i as i64) * 95;
            let intervals = (0..14)
                .map(|day| {
                    let open = day * 24 * 60 + 8 * 60 + offset;
                    TimeInterval::new(at(open), at(open + 90))
                })
                .collect();
            ParticipantAvailability::new(format!("u{i}"), format!("User {i}"), intervals)
        })
        .collect()
}

fn bench_perfect_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("perfect_path");
    for n in [2, 8, 24] {
        let participants = aligned_group(n);
        let options = MatchOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &participants, |b, p| {
            b.iter(|| run_match(black_box(p), black_box(&options)).unwrap());
        });
    }
    group.finish();
}

fn bench_partial_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_path");
    for n in [2, 8, 24] {
        let participants = staggered_group(n);
        let options = MatchOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &participants, |b, p| {
            b.iter(|| run_match(black_box(p), black_box(&options)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perfect_path, bench_partial_path);
criterion_main!(benches);
