//! Error taxonomy for the flip view core.
//!
//! There are deliberately few failure paths. Out-of-bounds scroll deltas are
//! *not* errors (they are silently rejected with zero consumed), and an
//! empty data set is a valid stable state. The only hard failures are host
//! programming errors surfaced through [`FlipError`].

use thiserror::Error;

/// Failures surfaced to the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// A target page index outside `[0, item_count)` was passed to an
    /// explicit scroll request. This is a programming error in the host,
    /// not a runtime condition; it is never retried or clamped.
    #[error("target index {index} is out of bounds for item count {item_count}")]
    IndexOutOfBounds { index: usize, item_count: usize },

    /// A guided scroll was requested while no child views are materialized.
    /// Direction resolution needs at least the first materialized view.
    #[error("cannot plan a guided scroll with no materialized views")]
    EmptyWindow,
}
