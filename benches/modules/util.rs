use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::Lazy;

/// Environment driven knobs, read once per bench process.
pub struct BenchConfig {
    pub measure_comp: bool,
    pub extra_patterns: bool,
    pub bench_search: bool,
}

pub static CONFIG: Lazy<BenchConfig> = Lazy::new(|| BenchConfig {
    measure_comp: env::var("MEASURE_COMP").is_ok(),
    extra_patterns: env::var("EXTRA_PATTERNS").is_ok(),
    bench_search: env::var("BENCH_SEARCH").is_ok(),
});

#[inline(never)]
pub fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{type_name}-{input_name}-{test_len}"),
        |b| {
            b.iter_batched_ref(
                || transform(make_input(test_len)),
                |test_data| {
                    test_fn(black_box(test_data.as_mut_slice()));
                    black_box(test_data);
                },
                batch_size,
            )
        },
    );
}
