use bsearch_answer::{capacity, matrix, median, placement, rate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_solvers(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let xs: Vec<u32> = (0..100_000).map(|_| rng.gen_range(1..=1_000_000_000)).collect();

    c.bench_function("ship_within_days_100k", |b| {
        b.iter(|| capacity::ship_within_days(black_box(&xs), 1000))
    });
    c.bench_function("min_eating_speed_100k", |b| {
        b.iter(|| rate::min_eating_speed(black_box(&xs), 1_000_000))
    });
    c.bench_function("aggressive_cows_100k", |b| {
        b.iter(|| placement::aggressive_cows(black_box(&xs), 500))
    });

    let stations: Vec<i64> = (0..10_000).map(|i| i * 7 + (i % 3)).collect();
    c.bench_function("gas_distance_10k", |b| {
        b.iter(|| placement::min_max_gas_distance(black_box(&stations), 5000))
    });

    let a: Vec<i32> = (0..1_000_000).step_by(2).collect();
    let bb: Vec<i32> = (1..1_000_000).step_by(2).collect();
    c.bench_function("median_of_two_sorted_1m", |b| {
        b.iter(|| median::median_of_two_sorted(black_box(&a), black_box(&bb)))
    });

    let grid: Vec<Vec<i32>> = (0..501)
        .map(|r| (0..501).map(|c| r * 3 + c * 2).collect())
        .collect();
    c.bench_function("median_row_sorted_501", |b| {
        b.iter(|| matrix::median_row_sorted(black_box(&grid)))
    });
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
