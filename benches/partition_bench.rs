//! Criterion benchmarks for the class partitioner.
//!
//! Uses synthetic rosters drawn from a seeded RNG so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_classroom::partition::{partition, PartitionConfig, PartitionRunner};
use u_classroom::roster::{Roster, Student, Table};

const LANGUAGES: [&str; 4] = ["es", "vi", "ar", "zh"];

fn synthetic_roster(n: usize, seed: u64) -> Roster {
    let mut rng = StdRng::seed_from_u64(seed);
    Roster::new(
        (0..n)
            .map(|id| {
                let s = Student::new(id, rng.random_range(150.0..260.0))
                    .with_special_ed(rng.random_bool(0.05))
                    .with_gifted(rng.random_bool(0.15));
                if rng.random_bool(0.1) {
                    s.with_language(LANGUAGES[rng.random_range(0..LANGUAGES.len())])
                } else {
                    s
                }
            })
            .collect(),
    )
}

fn synthetic_table(n: usize, seed: u64) -> Table {
    let mut table = Table::new(["id", "ESOL", "IEP", "GATES", "MAP_score"]);
    for s in synthetic_roster(n, seed).students() {
        table.push_row([
            s.id.to_string(),
            s.language_group.clone().unwrap_or_default(),
            if s.special_ed { "SPED" } else { "" }.to_string(),
            if s.gifted { "Yes" } else { "No" }.to_string(),
            format!("{:.0}", s.score),
        ]);
    }
    table
}

fn bench_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster");
    for &n in &[30usize, 120, 600] {
        let roster = synthetic_roster(n, 42);
        let config = PartitionConfig::new(6);
        group.bench_with_input(BenchmarkId::from_parameter(n), &roster, |b, roster| {
            b.iter(|| {
                let mut r = roster.clone();
                PartitionRunner::run(black_box(&mut r), &config).ok();
                r
            })
        });
    }
    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    for &n in &[120usize, 600] {
        let table = synthetic_table(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, table| {
            b.iter(|| partition(black_box(table.clone()), 6).ok())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_roster, bench_table);
criterion_main!(benches);
