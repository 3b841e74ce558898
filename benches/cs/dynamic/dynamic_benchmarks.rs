use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dynprog::cs::dynamic::{
    lcs_str_length, make_change, make_change_memoized, max_revenue_bottom_up,
    max_revenue_memoized, min_jumps,
};

fn bench_lcs(c: &mut Criterion) {
    let s1 = "ACCGGTCGAGTGCGCGGAAGCCGGCCGAA".repeat(20);
    let s2 = "GTCGTTCGGAATGCCGTTGCTCTGTAAA".repeat(20);
    c.bench_function("lcs_dna_580", |b| {
        b.iter(|| lcs_str_length(black_box(&s1), black_box(&s2)))
    });
}

fn bench_coin_change(c: &mut Criterion) {
    let coins = [1, 2, 5, 10, 15, 20, 50, 100];
    let mut group = c.benchmark_group("coin_change");
    group.bench_function("bottom_up", |b| {
        b.iter(|| make_change(black_box(1_000), &coins))
    });
    group.bench_function("memoized", |b| {
        b.iter(|| make_change_memoized(black_box(1_000), &coins))
    });
    group.finish();
}

fn bench_rod_cutting(c: &mut Criterion) {
    let prices: Vec<u64> = (0..=200).map(|len| len + len / 3).collect();
    let mut group = c.benchmark_group("rod_cutting");
    group.bench_function("bottom_up", |b| {
        b.iter(|| max_revenue_bottom_up(black_box(200), &prices))
    });
    group.bench_function("memoized", |b| {
        b.iter(|| max_revenue_memoized(black_box(200), &prices))
    });
    group.finish();
}

fn bench_min_jumps(c: &mut Criterion) {
    let path: Vec<usize> = (0..2_000).map(|i| 1 + i % 7).collect();
    c.bench_function("min_jumps_2000", |b| b.iter(|| min_jumps(black_box(&path))));
}

criterion_group!(
    benches,
    bench_lcs,
    bench_coin_change,
    bench_rod_cutting,
    bench_min_jumps
);
criterion_main!(benches);
