//! Error type shared by the sorting, searching and container modules.

use thiserror::Error;

/// Failures surfaced at the boundary of an algorithm or container call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// A range entry point was given an upper bound past the end of the sequence.
    #[error("invalid range [{lo}, {hi}] for a sequence of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// A scratch buffer or container growth could not be allocated.
    #[error("failed to allocate room for {requested} elements")]
    AllocationFailure { requested: usize },

    /// A bounded container is full.
    #[error("capacity of {capacity} elements exhausted")]
    CapacityExceeded { capacity: usize },

    /// A positional operation addressed an element that does not exist.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Check that the inclusive range `[lo, hi]` is addressable in a sequence of `len` elements.
///
/// `lo > hi` denotes an empty range and is accepted; only an upper bound past the end fails.
pub(crate) fn check_range(lo: usize, hi: usize, len: usize) -> Result<(), AlgoError> {
    if lo <= hi && hi >= len {
        return Err(AlgoError::InvalidRange { lo, hi, len });
    }
    Ok(())
}
