//! Random pivot selection shared by the quicksort variants.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Where a partition scheme expects to find its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionStyle {
    /// Pivot sits at the right boundary of the range.
    Lomuto,
    /// Pivot sits at the left boundary of the range.
    Hoare,
}

/// Source of pivot indices.
///
/// `pick` must return an index in `low..=high`.
pub trait PivotSource {
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

impl<P: PivotSource + ?Sized> PivotSource for &mut P {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        (**self).pick(low, high)
    }
}

/// Uniformly random pivots.
#[derive(Debug, Clone)]
pub struct RandomPivot<R = ThreadRng> {
    rng: R,
}

impl RandomPivot<ThreadRng> {
    /// Uses the thread local generator, which is seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPivot<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPivot<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

/// Pivots chosen by a closure, handy to force a specific partition in tests.
///
/// ```
/// use algo101::{quick_sort_with, FnPivot};
///
/// // Always the first element, the classic worst case for sorted input.
/// let sorted = quick_sort_with(&[3, 1, 2], |a, b| a.cmp(b), &mut FnPivot::new(|low, _high| low));
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPivot<F>(pub F);

impl<F: FnMut(usize, usize) -> usize> FnPivot<F> {
    pub fn new(pick: F) -> Self {
        Self(pick)
    }
}

impl<F: FnMut(usize, usize) -> usize> PivotSource for FnPivot<F> {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        (self.0)(low, high)
    }
}

/// Picks a pivot in `v[low..=high]` and moves it to the boundary `style` partitions around: `high`
/// for [`PartitionStyle::Lomuto`], `low` for [`PartitionStyle::Hoare`].
///
/// # Panics
///
/// Panics if `low > high`, `high >= v.len()` or `pivots` returns an index outside `low..=high`.
pub fn randomize_pivot<T, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    style: PartitionStyle,
    pivots: &mut P,
) where
    P: PivotSource + ?Sized,
{
    assert!(
        low <= high && high < v.len(),
        "pivot range {low}..={high} out of bounds for length {}",
        v.len()
    );

    let pivot = pivots.pick(low, high);
    assert!(
        (low..=high).contains(&pivot),
        "pivot source returned {pivot}, outside of {low}..={high}"
    );

    log::trace!("{style:?} pivot {pivot} in {low}..={high}");

    match style {
        PartitionStyle::Lomuto if pivot != high => v.swap(pivot, high),
        PartitionStyle::Hoare if pivot != low => v.swap(pivot, low),
        _ => {}
    }
}
