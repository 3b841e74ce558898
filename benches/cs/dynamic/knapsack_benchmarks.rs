use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dynprog::cs::dynamic::knapsack::solve;

fn random_instance(n: usize, max_weight: usize, seed: u64) -> (Vec<usize>, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..n).map(|_| rng.gen_range(1..=max_weight)).collect();
    let values = (0..n).map(|_| rng.gen_range(1..=1_000)).collect();
    (weights, values)
}

fn bench_knapsack_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_capacity");
    let (weights, values) = random_instance(50, 500, 42);

    for &capacity in &[1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| b.iter(|| solve(black_box(capacity), &weights, &values)),
        );
    }
    group.finish();
}

fn bench_knapsack_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_items");

    for &n in &[10, 100, 1_000] {
        let (weights, values) = random_instance(n, 100, n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| solve(black_box(5_000), &weights, &values))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_capacity, bench_knapsack_items);
criterion_main!(benches);
