//! Randomized quicksort with Lomuto partitioning.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use super::{check_range, lomuto_partition};
use crate::error::SortError;
use crate::pivot::{PivotSource, RandomPivot};
use crate::sort::natural_order;

pub mod inplace {
    //! Registers the in-place variant with the shared test tools separately from the copying one.
    use super::{quick_sort_inplace, quick_sort_inplace_by};

    sort_impl!(
        "quicksort_lomuto_inplace_unstable",
        inplace: quick_sort_inplace,
        quick_sort_inplace_by
    );
}

sort_impl!("quicksort_lomuto_unstable", copying: quick_sort, quick_sort_by);

// --- Copying ---

/// Returns a sorted copy of `v`, ascending or, with `reverse`, descending. `v` is left untouched.
///
/// Average *O*(*n* \* log(*n*)), worst-case *O*(*n*²) comparisons, e.g. when all elements are
/// equal.
///
/// ```
/// use algo101::quick_sort;
///
/// assert_eq!(quick_sort(&[64, 25, 12, 22, 11], false), [11, 12, 22, 25, 64]);
/// ```
#[inline]
pub fn quick_sort<T>(v: &[T], reverse: bool) -> Vec<T>
where
    T: Ord + Clone,
{
    quick_sort_by(v, natural_order(reverse))
}

#[inline]
pub fn quick_sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_with(v, compare, &mut RandomPivot::new())
}

/// Like [`quick_sort_by`], with pivots drawn from `pivots`.
pub fn quick_sort_with<T, F, P>(v: &[T], mut compare: F, pivots: &mut P) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    P: PivotSource + ?Sized,
{
    quicksort_copy(
        v.to_vec(),
        &mut |a, b| compare(a, b) == Ordering::Less,
        pivots,
    )
}

fn quicksort_copy<T, F, P>(v: Vec<T>, is_less: &mut F, pivots: &mut P) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource + ?Sized,
{
    let mut sorted = Vec::with_capacity(v.len());

    // Owned parts still to be emitted, the top of the stack comes next in the output. Each
    // partition replaces its part by `left`, `[pivot]` and `right`, so the call stack never grows
    // with the input, not even when every element is equal.
    let mut parts = vec![v];

    while let Some(mut part) = parts.pop() {
        if part.len() < 2 {
            sorted.append(&mut part);
            continue;
        }

        let high = part.len() - 1;
        let mid = lomuto_partition(&mut part, 0, high, is_less, pivots);

        // part becomes left, each piece owns its own allocation from here on.
        let right = part.split_off(mid + 1);
        let pivot = part.split_off(mid);

        parts.push(right);
        parts.push(pivot);
        parts.push(part);
    }

    sorted
}

// --- In-place ---

/// Sorts `v` in place, ascending or, with `reverse`, descending, and returns it.
///
/// ```
/// use algo101::quick_sort_inplace;
///
/// let mut v = [0, -1, -3, 2, 1];
/// assert_eq!(quick_sort_inplace(&mut v, false), [-3, -1, 0, 1, 2]);
/// ```
#[inline]
pub fn quick_sort_inplace<T>(v: &mut [T], reverse: bool) -> &mut [T]
where
    T: Ord,
{
    quick_sort_inplace_by(v, natural_order(reverse))
}

pub fn quick_sort_inplace_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() >= 2 {
        let high = v.len() - 1;
        quicksort_inplace(
            v,
            0,
            high,
            &mut |a, b| compare(a, b) == Ordering::Less,
            &mut RandomPivot::new(),
        );
    }

    v
}

/// Sorts only `v[range]` in place and returns the whole of `v`.
///
/// Returns [`SortError::InvalidRange`] if the range is reversed or reaches past the end of `v`.
#[inline]
pub fn quick_sort_inplace_range<T>(
    v: &mut [T],
    reverse: bool,
    range: RangeInclusive<usize>,
) -> Result<&mut [T], SortError>
where
    T: Ord,
{
    quick_sort_inplace_with(v, range, natural_order(reverse), &mut RandomPivot::new())
}

/// Like [`quick_sort_inplace_range`], with a comparator and pivots drawn from `pivots`.
pub fn quick_sort_inplace_with<'a, T, F, P>(
    v: &'a mut [T],
    range: RangeInclusive<usize>,
    mut compare: F,
    pivots: &mut P,
) -> Result<&'a mut [T], SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    P: PivotSource + ?Sized,
{
    let (low, high) = check_range(v.len(), range)?;

    quicksort_inplace(
        v,
        low,
        high,
        &mut |a, b| compare(a, b) == Ordering::Less,
        pivots,
    );

    Ok(v)
}

fn quicksort_inplace<T, F, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
    pivots: &mut P,
) where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource + ?Sized,
{
    // Pending closed ranges, each with at least two elements. Popping the left side first
    // processes ranges in the same order as plain recursion would.
    let mut ranges = Vec::new();
    if low < high {
        ranges.push((low, high));
    }

    while let Some((low, high)) = ranges.pop() {
        let mid = lomuto_partition(v, low, high, is_less, pivots);

        if mid + 1 < high {
            ranges.push((mid + 1, high));
        }
        if mid > low + 1 {
            ranges.push((low, mid - 1));
        }
    }
}
