use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use algo101::sort::{quicksort, selection};

use crate::modules::util;

/// Prints the mean number of comparisons instead of timing, driven through `sort_by` so the
/// element type is the same as in the timed runs.
fn print_mean_comparisons<S: Sort, T: Ord + Clone + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    make_input: impl Fn(usize) -> Vec<i32>,
) {
    let runs: u64 = match test_len {
        0..=20 => 50_000,
        21..=9_999 => 2_000,
        _ => 50,
    };

    let mut comparisons = 0u64;
    for _ in 0..runs {
        let mut v = transform(make_input(test_len));
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
    }

    println!("{name}: mean comparisons: {}", comparisons / runs);
}

/// Inputs that are quadratic for the given sort and would dominate the whole run.
fn too_slow(bench_name: &str, test_len: usize, input_name: &str) -> bool {
    if bench_name.starts_with("selection") {
        return test_len > 2_048;
    }

    let few_distinct = matches!(input_name, "random_binary" | "90p_zero_10p_one" | "all_equal");
    bench_name.contains("lomuto") && few_distinct && test_len > 10_000
}

fn bench_fn<S: Sort, T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();
    if too_slow(&bench_name, test_len, input_name) {
        return;
    }

    if util::CONFIG.measure_comp {
        let name = format!("{bench_name}-comp-{type_name}-{input_name}-{test_len}");
        print_mean_comparisons::<S, T>(&name, test_len, transform, make_input);
    } else {
        util::bench_fn(
            c,
            test_len,
            type_name,
            transform,
            input_name,
            make_input,
            &bench_name,
            |v| S::sort(v, false),
        );
    }
}

pub fn bench<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl_path:path) => {{
            use $sort_impl_path::*;

            bench_fn::<SortImpl, T>(
                c,
                test_len,
                type_name,
                transform,
                input_name,
                make_input,
            );
        }};
    }

    bench_inst!(selection);

    bench_inst!(quicksort::lomuto);
    bench_inst!(quicksort::lomuto::inplace);

    bench_inst!(quicksort::hoare);
    bench_inst!(quicksort::hoare::inplace);

    bench_inst!(crate::std_sort);
}
