use core::cmp::Ordering;

pub mod quicksort;
pub mod selection;

/// Comparator for the natural order of `T`, flipped when `reverse` is set.
#[inline]
pub(crate) fn natural_order<T: Ord>(reverse: bool) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        if reverse {
            b.cmp(a)
        } else {
            a.cmp(b)
        }
    }
}
