//! Loop-based binary search.

use crate::counter::ComparisonCounter;
use crate::error::{check_range, AlgoError};
use std::cmp::Ordering;

/// Bisect the half-open window `[lo, end)` of a sorted slice.
///
/// Probes `lo + (end - 1 - lo) / 2`, the same index as `lo + (hi - lo) / 2`
/// over the inclusive `[lo, hi]`. One counted comparison per probe.
fn bisect<T: Ord>(
    data: &[T],
    mut lo: usize,
    mut end: usize,
    target: &T,
    counter: &mut ComparisonCounter,
) -> Option<usize> {
    while lo < end {
        let mid = lo + (end - 1 - lo) / 2;
        match counter.compare(&data[mid], target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => end = mid,
        }
    }
    None
}

/// Find `target` in an ascending slice.
///
/// Among duplicates the first index hit by the bisection order is returned,
/// not necessarily the first or last occurrence. Unsorted input gives an
/// unspecified but memory-safe answer.
///
/// # Example
/// ```
/// use linear_algo::counter::ComparisonCounter;
/// use linear_algo::search::binary_search::binary_search_iterative;
///
/// let data = [1, 3, 5, 7, 9, 11];
/// let mut counter = ComparisonCounter::new();
/// assert_eq!(binary_search_iterative(&data, &7, &mut counter), Some(3));
/// assert_eq!(binary_search_iterative(&data, &4, &mut counter), None);
/// ```
pub fn binary_search_iterative<T: Ord>(
    data: &[T],
    target: &T,
    counter: &mut ComparisonCounter,
) -> Option<usize> {
    bisect(data, 0, data.len(), target, counter)
}

/// Iterative binary search over the inclusive range `[lo, hi]`.
///
/// `lo > hi` is an empty range and yields `Ok(None)`.
pub fn binary_search_iterative_in<T: Ord>(
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
