//! Classic comparison based algorithms: binary search, selection sort and randomized quicksort
//! with Lomuto and Hoare partitioning, each as a copying and an in-place variant.
//!
//! Every sort takes a `reverse` flag for descending order and comes with a `_by` form that takes
//! an explicit comparator.

/// Implements [`sort_test_tools::Sort`] for the sort defined in the invoking module, so that the
/// shared tests and benchmarks can drive it.
///
/// `inplace` sorts mutate the slice they are given, `copying` sorts return a new `Vec` which is
/// written back.
macro_rules! sort_impl {
    ($name:expr, inplace: $sort:ident, $sort_by:ident) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T], reverse: bool)
            where
                T: Ord + Clone,
            {
                $sort(arr, reverse);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                $sort_by(arr, compare);
            }
        }
    };
    ($name:expr, copying: $sort:ident, $sort_by:ident) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T], reverse: bool)
            where
                T: Ord + Clone,
            {
                let sorted = $sort(arr, reverse);
                arr.clone_from_slice(&sorted);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                let sorted = $sort_by(arr, compare);
                arr.clone_from_slice(&sorted);
            }
        }
    };
}

pub mod error;
pub mod pivot;
pub mod search;
pub mod sort;

pub use error::SortError;
pub use pivot::{randomize_pivot, FnPivot, PartitionStyle, PivotSource, RandomPivot};
pub use search::{binary_search, binary_search_by};
pub use sort::quicksort::hoare::{
    quick_sort_hoare, quick_sort_hoare_by, quick_sort_hoare_inplace, quick_sort_hoare_inplace_by,
    quick_sort_hoare_inplace_range, quick_sort_hoare_inplace_with, quick_sort_hoare_with,
};
pub use sort::quicksort::lomuto::{
    quick_sort, quick_sort_by, quick_sort_inplace, quick_sort_inplace_by,
    quick_sort_inplace_range, quick_sort_inplace_with, quick_sort_with,
};
pub use sort::selection::{selection_sort, selection_sort_by};
