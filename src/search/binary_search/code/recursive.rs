//! Recursive binary search.

use crate::counter::ComparisonCounter;
use crate::error::{check_range, AlgoError};
use std::cmp::Ordering;

/// Tail-recursive twin of the iterative bisection over `[lo, end)`.
fn bisect<T: Ord>(
    data: &[T],
    lo: usize,
    end: usize,
    target: &T,
    counter: &mut ComparisonCounter,
) -> Option<usize> {
    if lo >= end {
        return None;
    }

    let mid = lo + (end - 1 - lo) / 2;
    match counter.compare(&data[mid], target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => bisect(data, mid + 1, end, target, counter),
        Ordering::Greater => bisect(data, lo, mid, target, counter),
    }
}

/// Find `target` in an ascending slice by recursing on a shrinking window.
///
/// Returns the same index and performs the same comparisons as
/// [`binary_search_iterative`](super::binary_search_iterative). Depth is
/// `O(log n)`.
pub fn binary_search_recursive<T: Ord>(
    data: &[T],
    target: &T,
    counter: &mut ComparisonCounter,
) -> Option<usize> {
    bisect(data, 0, data.len(), target, counter)
}

/// Recursive binary search over the inclusive range `[lo, hi]`.
pub fn binary_search_recursive_in<T: Ord>(
    data: &[T],
    lo: usize,
    hi: usize,
    target: &T,
    counter: &mut ComparisonCounter,
) -> Result<Option<usize>, AlgoError> {
    check_range(lo, hi, data.len())?;
    if lo > hi {
        return Ok(None);
    }
    Ok(bisect(data, lo, hi + 1, target, counter))
}
