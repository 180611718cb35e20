use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uplift_stats::resample::bootstrap_confidence_interval;
use uplift_stats::testing::{chi_square_test, t_test_independent};

fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn bench_t_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("t_test");

    let a = random_f64(10_000, 42);
    let b = random_f64(10_000, 43);
    group.bench_function("10k_vs_10k", |bench| {
        bench.iter(|| t_test_independent(black_box(&a), black_box(&b), 0.05))
    });

    group.finish();
}

fn bench_chi_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("chi_square");

    let observed = random_f64(1_000, 7);
    let expected = vec![0.5; 1_000];
    group.bench_function("1k_categories", |bench| {
        bench.iter(|| chi_square_test(black_box(&observed), black_box(&expected), 0.05))
    });

    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");

    let data = random_f64(500, 42);
    group.bench_function("500_values_1k_iterations", |bench| {
        bench.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            bootstrap_confidence_interval(black_box(&data), 1_000, 0.95, &mut rng)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_t_test, bench_chi_square, bench_bootstrap);
criterion_main!(benches);
