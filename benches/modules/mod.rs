use criterion::Criterion;

pub mod search;
pub mod sort;
pub mod util;

pub fn bench_len_type_pattern_combo<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    len: usize,
    type_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    make_input: &fn(usize) -> Vec<i32>,
) {
    if util::CONFIG.bench_search {
        search::bench(
            c,
            len,
            type_name,
            transform,
            input_name,
            make_input,
        );
    } else {
        sort::bench(
            c,
            len,
            type_name,
            transform,
            input_name,
            make_input,
        );
    }
}
