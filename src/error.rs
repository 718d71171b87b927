use thiserror::Error;

/// Errors returned by the sorts that take explicit bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The explicit bounds given to an in-place sort are reversed or reach past the end of the
    /// slice.
    #[error("invalid range {low}..={high} for a sequence of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },
}
