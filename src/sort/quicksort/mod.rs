//! Randomized quicksort, with the two classic partition schemes.
//!
//! Both schemes work on the closed index range `low..=high` of a single buffer. The copying
//! variants run them on an owned copy and split that copy into new owned parts, the in-place
//! variants track pending index ranges over the caller's slice. Either way the pending work lives
//! on a heap allocated stack, never on the call stack.

use core::ops::RangeInclusive;

use crate::error::SortError;
use crate::pivot::{randomize_pivot, PartitionStyle, PivotSource};

pub mod hoare;
pub mod lomuto;

/// Partitions `v[low..=high]` around a random pivot and returns the pivot's final position `mid`.
///
/// Afterwards every element in `low..mid` compares true for `is_less(elem, pivot)` and no element
/// in `mid + 1..=high` does.
///
/// Requires `low < high < v.len()`.
pub(crate) fn lomuto_partition<T, F, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
    pivots: &mut P,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource + ?Sized,
{
    randomize_pivot(v, low, high, PartitionStyle::Lomuto, pivots);

    // The pivot stays at `high` for the whole scan.
    let mut last_idx = low;
    for idx in low..high {
        if is_less(&v[idx], &v[high]) {
            if idx != last_idx {
                v.swap(idx, last_idx);
            }
            last_idx += 1;
        }
    }

    v.swap(high, last_idx);

    last_idx
}

/// Partitions `v[low..=high]` around a random pivot and returns the split point `mid`, with
/// `low <= mid < high`.
///
/// Afterwards no element in `low..=mid` compares true for `is_less(pivot, elem)` and no element in
/// `mid + 1..=high` compares true for `is_less(elem, pivot)`. Unlike [`lomuto_partition`] the
/// pivot is not necessarily at `mid`, it is part of one of the two halves.
///
/// Requires `low < high < v.len()`.
pub(crate) fn hoare_partition<T, F, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
    pivots: &mut P,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource + ?Sized,
{
    randomize_pivot(v, low, high, PartitionStyle::Hoare, pivots);

    // The swaps below may move the pivot away from `low`. Follow it around instead of keeping a
    // copy of its value.
    let mut pivot_pos = low;

    let mut left = low;
    let mut right = high;

    loop {
        // The bounds only matter if `is_less` is not a total order, otherwise the pivot or a
        // previously swapped element always stops the cursor in range.
        while left < high && is_less(&v[left], &v[pivot_pos]) {
            left += 1;
        }

        while right > low && is_less(&v[pivot_pos], &v[right]) {
            right -= 1;
        }

        if left >= right {
            // `right == high` is only reachable without a total order. Keep both halves
            // non-empty so the recursion always makes progress.
            return right.min(high - 1);
        }

        v.swap(left, right);
        if pivot_pos == left {
            pivot_pos = right;
        } else if pivot_pos == right {
            pivot_pos = left;
        }

        left += 1;
        right -= 1;
    }
}

/// Checks explicitly supplied bounds against a slice of length `len`.
pub(crate) fn check_range(
    len: usize,
    range: RangeInclusive<usize>,
) -> Result<(usize, usize), SortError> {
    let (low, high) = range.into_inner();

    if low > high || high >= len {
        log::debug!("rejecting range {low}..={high} for length {len}");
        return Err(SortError::InvalidRange { low, high, len });
    }

    Ok((low, high))
}
