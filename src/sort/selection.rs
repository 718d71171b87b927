//! Selection sort.

use core::cmp::Ordering;

use super::natural_order;

sort_impl!("selection_sort_unstable", inplace: selection_sort, selection_sort_by);

/// Sorts `v` in place, ascending or, with `reverse`, descending, and returns it.
///
/// *O*(*n*²) comparisons regardless of the input. Does not preserve the order of equal elements.
///
/// ```
/// use algo101::selection_sort;
///
/// let mut v = [4, 2, 5, 1, 3];
/// assert_eq!(selection_sort(&mut v, false), [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn selection_sort<T>(v: &mut [T], reverse: bool) -> &mut [T]
where
    T: Ord,
{
    selection_sort_by(v, natural_order(reverse))
}

#[inline]
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection(v, &mut |a, b| compare(a, b) == Ordering::Less);
    v
}

fn selection<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}
