use core::cmp::Ordering;

/// Returns the index of an element equal to `target` in the ascending sorted slice `v`, or `None`
/// if there is no such element.
///
/// If several elements match, any one of their indices may be returned. If `v` is not sorted the
/// result is unspecified, but the call still terminates after *O*(log *n*) comparisons.
///
/// ```
/// use algo101::binary_search;
///
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &3), Some(2));
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &0), None);
/// ```
#[inline]
pub fn binary_search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    binary_search_by(v, |elem| elem.cmp(target))
}

/// Binary search with a comparator that reports how an inspected element orders relative to the
/// target, `Less` meaning the element sits before the target.
pub fn binary_search_by<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Closed interval [start, end].
    let mut start = 0;
    let mut end = v.len().checked_sub(1)?;

    while start <= end {
        // Same as (start + end) / 2 without the overflow.
        let mid = start + (end - start) / 2;

        match f(&v[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => start = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                end = mid - 1;
            }
        }
    }

    None
}
