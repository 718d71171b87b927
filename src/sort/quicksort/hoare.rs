//! Randomized quicksort with Hoare partitioning.
//!
//! The split point returned by the partition belongs to the left half: ranges recurse as
//! `low..=mid` and `mid + 1..=high`. The pivot is not fixed in place, so duplicates of the pivot
//! value may end up on either side.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use super::{check_range, hoare_partition};
use crate::error::SortError;
use crate::pivot::{PivotSource, RandomPivot};
use crate::sort::natural_order;

pub mod inplace {
    //! Registers the in-place variant with the shared test tools separately from the copying one.
    use super::{quick_sort_hoare_inplace, quick_sort_hoare_inplace_by};

    sort_impl!(
        "quicksort_hoare_inplace_unstable",
        inplace: quick_sort_hoare_inplace,
        quick_sort_hoare_inplace_by
    );
}

sort_impl!("quicksort_hoare_unstable", copying: quick_sort_hoare, quick_sort_hoare_by);

// --- Copying ---

/// Returns a sorted copy of `v`, ascending or, with `reverse`, descending. `v` is left untouched.
///
/// ```
/// use algo101::quick_sort_hoare;
///
/// assert_eq!(quick_sort_hoare(&[3, 1, 4, 1, 5, 9], true), [9, 5, 4, 3, 1, 1]);
/// ```
#[inline]
pub fn quick_sort_hoare<T>(v: &[T], reverse: bool) -> Vec<T>
where
    T: Ord + Clone,
{
    quick_sort_hoare_by(v, natural_order(reverse))
}

#[inline]
pub fn quick_sort_hoare_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_hoare_with(v, compare, &mut RandomPivot::new())
}

/// Like [`quick_sort_hoare_by`], with pivots drawn from `pivots`.
pub fn quick_sort_hoare_with<T, F, P>(v: &[T], mut compare: F, pivots: &mut P) -> Vec<T>
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

    // Same scheme as the Lomuto copy: pending owned parts, the next one in output order on top.
    let mut parts = vec![v];

    while let Some(mut part) = parts.pop() {
        if part.len() < 2 {
            sorted.append(&mut part);
            continue;
        }

        let high = part.len() - 1;
        let mid = hoare_partition(&mut part, 0, high, is_less, pivots);

        // The pivot already lives in one of the halves, nothing to re-insert.
        let right = part.split_off(mid + 1);

        parts.push(right);
        parts.push(part);
    }

    sorted
}

// --- In-place ---

/// Sorts `v` in place, ascending or, with `reverse`, descending, and returns it.
#[inline]
pub fn quick_sort_hoare_inplace<T>(v: &mut [T], reverse: bool) -> &mut [T]
where
    T: Ord,
{
    quick_sort_hoare_inplace_by(v, natural_order(reverse))
}

pub fn quick_sort_hoare_inplace_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
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
pub fn quick_sort_hoare_inplace_range<T>(
    v: &mut [T],
    reverse: bool,
    range: RangeInclusive<usize>,
) -> Result<&mut [T], SortError>
where
    T: Ord,
{
    quick_sort_hoare_inplace_with(v, range, natural_order(reverse), &mut RandomPivot::new())
}

/// Like [`quick_sort_hoare_inplace_range`], with a comparator and pivots drawn from `pivots`.
pub fn quick_sort_hoare_inplace_with<'a, T, F, P>(
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
    let mut ranges = Vec::new();
    if low < high {
        ranges.push((low, high));
    }

    while let Some((low, high)) = ranges.pop() {
        // mid < high, both halves are strictly smaller than the range.
        let mid = hoare_partition(v, low, high, is_less, pivots);

        if mid + 1 < high {
            ranges.push((mid + 1, high));
        }
        if mid > low {
            ranges.push((low, mid));
        }
    }
}
