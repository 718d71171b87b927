use std::cmp::Ordering;

/// Common interface over every sort in the crate, so that one set of tests and benchmarks can
/// drive all of them.
///
/// Copying sorts write their result back into `arr`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T], reverse: bool)
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
