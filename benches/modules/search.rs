use criterion::{black_box, Criterion};

use rand::prelude::*;

use crate::modules::util::bench_fn;

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    search: fn(&[T], &T) -> Option<usize>,
) {
    let with_target = |len: usize| -> Vec<i32> {
        // The ascending_stride pattern holds only even values, an odd target is a guaranteed miss.
        let rand_val = rand::thread_rng().gen_range(0..(len as i32 * 2).max(1));

        // Inject the value to look for as the last element.
        let mut v = make_input(len);
        v.push(rand_val);

        v
    };

    let search_last = |v: &mut [T]| {
        let end = v.len() - 1;
        let target = &v[end];

        black_box(search(&v[..end], target));
    };

    bench_fn(
        c,
        test_len,
        type_name,
        transform,
        input_name,
        with_target,
        bench_name,
        search_last,
    )
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: &fn(usize) -> Vec<i32>,
) {
    if input_name != "ascending_stride" {
        // Binary search only makes sense on a sorted haystack.
        return;
    }

    bench_impl(
        c,
        test_len,
        type_name,
        transform,
        input_name,
        make_input,
        "binary_search",
        algo101::binary_search,
    );

    bench_impl(
        c,
        test_len,
        type_name,
        transform,
        input_name,
        make_input,
        "rust_std_binary_search",
        |v, target| v.binary_search(target).ok(),
    );
}
