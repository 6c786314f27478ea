//! Top-down merge sort.
//!
//! Each merge step owns a scratch buffer sized to the span it merges. The
//! buffer is reserved fallibly so an allocation failure reaches the caller as
//! [`AlgoError::AllocationFailure`] instead of aborting mid-merge.

use crate::counter::ComparisonCounter;
use crate::error::{check_range, AlgoError};

/// Merge the sorted runs `data[..mid]` and `data[mid..]` in place of `data`.
///
/// One counted comparison per pair of heads considered; ties take the left
/// run, which keeps the sort stable. The tail of whichever run outlives the
/// other is copied without comparisons.
///
/// # Panics
/// Panics if `mid > data.len()`.
pub fn merge<T: PartialOrd + Copy>(
    data: &mut [T],
    mid: usize,
    counter: &mut ComparisonCounter,
) -> Result<(), AlgoError> {
    let len = data.len();
    let mut scratch: Vec<T> = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| AlgoError::AllocationFailure { requested: len })?;

    let (mut left, mut right) = (0, mid);
    while left < mid && right < len {
        if counter.le(&data[left], &data[right]) {
            scratch.push(data[left]);
            left += 1;
        } else {
            scratch.push(data[right]);
            right += 1;
        }
    }
    scratch.extend_from_slice(&data[left..mid]);
    scratch.extend_from_slice(&data[right..]);

    data.copy_from_slice(&scratch);
    Ok(())
}

/// Stable merge sort of the whole slice.
///
/// # Example
/// ```
/// use linear_algo::counter::ComparisonCounter;
/// use linear_algo::sorting::comparison_sort::merge_sort;
///
/// let mut data = vec![4, 1, 3, 2];
/// let mut counter = ComparisonCounter::new();
/// merge_sort(&mut data, &mut counter).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 4]);
/// ```
pub fn merge_sort<T: PartialOrd + Copy>(
    data: &mut [T],
    counter: &mut ComparisonCounter,
) -> Result<(), AlgoError> {
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }

    // Left half is `[0, mid]` inclusive, matching `lo + (hi - lo) / 2` on `[0, len - 1]`.
    let mid = (len - 1) / 2 + 1;
    merge_sort(&mut data[..mid], counter)?;
    merge_sort(&mut data[mid..], counter)?;
    merge(data, mid, counter)
}

/// Merge sort restricted to the inclusive range `[lo, hi]`.
pub fn merge_sort_range<T: PartialOrd + Copy>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    counter: &mut ComparisonCounter,
) -> Result<(), AlgoError> {
    check_range(lo, hi, data.len())?;
    if lo >= hi {
        return Ok(());
    }
    merge_sort(&mut data[lo..=hi], counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_interleaved_runs() {
        let mut data = [1, 3, 5, 2, 4, 6];
        let mut counter = ComparisonCounter::new();
        merge(&mut data, 3, &mut counter).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
        assert_eq!(counter.read(), 5);
    }

    #[test]
    fn test_merge_disjoint_runs_copy_tail_uncounted() {
        let mut data = [1, 2, 3, 4, 5, 6];
        let mut counter = ComparisonCounter::new();
        merge(&mut data, 3, &mut counter).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
        assert_eq!(counter.read(), 3);
    }

    #[test]
    fn test_split_point_matches_inclusive_midpoint() {
        // [lo, hi] = [0, 4] splits into [0, 2] and [3, 4].
        let mut data = [5, 4, 3, 2, 1];
        let mut counter = ComparisonCounter::new();
        merge_sort(&mut data, &mut counter).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 5]);
        // [5,4]: 1, [4,5]+[3]: 1, [2,1]: 1, [3,4,5]+[1,2]: 2
        assert_eq!(counter.read(), 5);
    }

    #[test]
    fn test_range_leaves_outside_untouched() {
        let mut data = [9, 3, 2, 1, 0];
        let mut counter = ComparisonCounter::new();
        merge_sort_range(&mut data, 1, 3, &mut counter).unwrap();
        assert_eq!(data, [9, 1, 2, 3, 0]);
    }

    #[test]
    fn test_range_past_end() {
        let mut data = [1, 2, 3];
        let mut counter = ComparisonCounter::new();
        assert_eq!(
            merge_sort_range(&mut data, 0, 3, &mut counter),
            Err(AlgoError::InvalidRange { lo: 0, hi: 3, len: 3 })
        );
    }
}
